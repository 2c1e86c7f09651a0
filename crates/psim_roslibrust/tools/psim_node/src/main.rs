use std::sync::Arc;

use anyhow::{Context, Result};
use roslibrust::rosbridge::ClientHandle;
use tracing::info;

use psim_node::config::{Config, TF_TOPIC};
use psim_node::node;
use psim_roslibrust::msgs::{MecanumWheel, TFMessage};
use psim_roslibrust::{RosbridgePublisher, TfBroadcaster};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_args().context("parse command line")?;

    let ros = ClientHandle::new(&config.bridge_url)
        .await
        .with_context(|| format!("connect to rosbridge at {}", config.bridge_url))?;

    let tf_pub = Arc::new(
        ros.advertise::<TFMessage>(TF_TOPIC)
            .await
            .context("advertise /tf")?,
    );
    let command_sub = ros
        .subscribe::<MecanumWheel>(&config.command_topic)
        .await
        .with_context(|| format!("subscribe to {}", config.command_topic))?;

    info!(
        "node started name={} bridge={} command_topic={} period_ms={}",
        config.node_name, config.bridge_url, config.command_topic, config.period_ms
    );

    let sim = node::shared_simulator();
    let broadcaster = TfBroadcaster::new(Arc::new(RosbridgePublisher(tf_pub)));

    let sim_commands = Arc::clone(&sim);
    tokio::spawn(async move {
        loop {
            let msg = command_sub.next().await;
            node::apply_command(&sim_commands, msg.into());
        }
    });

    let period = config.period();
    tokio::spawn(async move { node::run_tick_loop(sim, broadcaster, period).await });

    tokio::signal::ctrl_c().await?;
    info!("shutdown");
    Ok(())
}
