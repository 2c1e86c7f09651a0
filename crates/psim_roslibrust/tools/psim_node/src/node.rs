use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use psim_core::{PoseSimulator, WheelCommand};
use psim_roslibrust::msgs::TFMessage;
use psim_roslibrust::{stamp_now, MessageSink, TfBroadcaster};
use tracing::warn;

/// Simulator state shared between the command task and the tick task.
pub type SharedSimulator = Arc<Mutex<PoseSimulator>>;

pub fn shared_simulator() -> SharedSimulator {
    share(PoseSimulator::new())
}

pub fn share(sim: PoseSimulator) -> SharedSimulator {
    Arc::new(Mutex::new(sim))
}

fn lock(sim: &SharedSimulator) -> MutexGuard<'_, PoseSimulator> {
    match sim.lock() {
        Ok(guard) => guard,
        Err(poison) => {
            warn!("simulator state mutex poisoned");
            poison.into_inner()
        }
    }
}

/// Integrate one inbound command into the shared simulator.
///
/// Nothing is emitted here; the next tick picks the new estimate up.
pub fn apply_command(sim: &SharedSimulator, cmd: WheelCommand) {
    lock(sim).apply_command(&cmd);
}

/// Run the periodic drift-and-broadcast loop forever.
///
/// Each tick advances the simulator under the lock, then publishes both
/// transform records. The lock is never held across an await. Publish
/// failures are logged and dropped; broadcast has no retry semantics.
pub async fn run_tick_loop<S>(
    sim: SharedSimulator,
    broadcaster: TfBroadcaster<S>,
    period: Duration,
) -> !
where
    S: MessageSink<TFMessage>,
{
    let mut interval = tokio::time::interval(period);

    loop {
        interval.tick().await;

        let records = lock(&sim).tick(stamp_now());

        for record in &records {
            if let Err(err) = broadcaster.send_transform(record).await {
                warn!("transform broadcast failed: {err}");
            }
        }
    }
}
