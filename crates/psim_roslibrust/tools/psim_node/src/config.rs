use std::env;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_NODE_NAME: &str = "p_sim";
pub const DEFAULT_BRIDGE_URL: &str = "ws://localhost:9090";
pub const DEFAULT_COMMAND_TOPIC: &str = "/manual_mode/mecanum_wheel";
pub const DEFAULT_PERIOD_MS: u64 = 20;

/// TF broadcasts always go to the canonical topic.
pub const TF_TOPIC: &str = "/tf";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid tick period {value:?}: expected a positive integer of milliseconds")]
    InvalidPeriod { value: String },
}

#[derive(Debug)]
pub struct Config {
    pub node_name: String,
    pub bridge_url: String,
    pub command_topic: String,
    pub period_ms: u64,
}

impl Config {
    pub fn from_args() -> Result<Self, ConfigError> {
        Self::from_args_iter(env::args())
    }

    /// Parse flags over env-var fallbacks. Unknown flags are ignored.
    pub fn from_args_iter<I, S>(iter: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut node_name =
            env::var("PSIM_NODE_NAME").unwrap_or_else(|_| DEFAULT_NODE_NAME.to_string());
        let mut bridge_url =
            env::var("PSIM_BRIDGE_URL").unwrap_or_else(|_| DEFAULT_BRIDGE_URL.to_string());
        let mut command_topic =
            env::var("PSIM_COMMAND_TOPIC").unwrap_or_else(|_| DEFAULT_COMMAND_TOPIC.to_string());
        let mut period_ms = match env::var("PSIM_PERIOD_MS") {
            Ok(value) => parse_period(&value)?,
            Err(_) => DEFAULT_PERIOD_MS,
        };

        let mut args = iter.into_iter();
        let _ = args.next();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "-h" | "--help" => {
                    print_usage();
                    std::process::exit(0);
                }
                "--node-name" => {
                    if let Some(value) = args.next() {
                        node_name = value.as_ref().to_string();
                    }
                }
                "--bridge-url" => {
                    if let Some(value) = args.next() {
                        bridge_url = value.as_ref().to_string();
                    }
                }
                "--command-topic" => {
                    if let Some(value) = args.next() {
                        command_topic = value.as_ref().to_string();
                    }
                }
                "--period-ms" => {
                    if let Some(value) = args.next() {
                        period_ms = parse_period(value.as_ref())?;
                    }
                }
                _ if arg.starts_with("--node-name=") => {
                    node_name = arg["--node-name=".len()..].to_string();
                }
                _ if arg.starts_with("--bridge-url=") => {
                    bridge_url = arg["--bridge-url=".len()..].to_string();
                }
                _ if arg.starts_with("--command-topic=") => {
                    command_topic = arg["--command-topic=".len()..].to_string();
                }
                _ if arg.starts_with("--period-ms=") => {
                    period_ms = parse_period(&arg["--period-ms=".len()..])?;
                }
                _ => {}
            }
        }

        Ok(Self {
            node_name,
            bridge_url,
            command_topic,
            period_ms,
        })
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

fn print_usage() {
    println!(
        "psim_node [--node-name <name>] [--bridge-url ws://host:port] [--command-topic <topic>] [--period-ms <ms>]"
    );
}

fn parse_period(value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|ms| *ms > 0)
        .ok_or_else(|| ConfigError::InvalidPeriod {
            value: value.to_string(),
        })
}
