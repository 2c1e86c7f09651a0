use std::env;
use std::sync::{Mutex, OnceLock};

use psim_node::config::{
    Config, DEFAULT_BRIDGE_URL, DEFAULT_COMMAND_TOPIC, DEFAULT_NODE_NAME, DEFAULT_PERIOD_MS,
};

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().expect("lock")
}

fn clear_env() {
    env::remove_var("PSIM_NODE_NAME");
    env::remove_var("PSIM_BRIDGE_URL");
    env::remove_var("PSIM_COMMAND_TOPIC");
    env::remove_var("PSIM_PERIOD_MS");
}

#[test]
fn defaults_without_flags_or_env() {
    let _guard = env_lock();
    clear_env();

    let config = Config::from_args_iter(["bin"]).unwrap();
    assert_eq!(config.node_name, DEFAULT_NODE_NAME);
    assert_eq!(config.bridge_url, DEFAULT_BRIDGE_URL);
    assert_eq!(config.command_topic, DEFAULT_COMMAND_TOPIC);
    assert_eq!(config.period_ms, DEFAULT_PERIOD_MS);
}

#[test]
fn space_and_equals_flag_forms_are_equivalent() {
    let _guard = env_lock();
    clear_env();

    let spaced = Config::from_args_iter([
        "bin",
        "--node-name",
        "sim_a",
        "--bridge-url",
        "ws://robot:9090",
        "--command-topic",
        "/drive",
        "--period-ms",
        "50",
    ])
    .unwrap();
    let equals = Config::from_args_iter([
        "bin",
        "--node-name=sim_a",
        "--bridge-url=ws://robot:9090",
        "--command-topic=/drive",
        "--period-ms=50",
    ])
    .unwrap();

    assert_eq!(spaced.node_name, equals.node_name);
    assert_eq!(spaced.bridge_url, equals.bridge_url);
    assert_eq!(spaced.command_topic, equals.command_topic);
    assert_eq!(spaced.period_ms, 50);
    assert_eq!(equals.period_ms, 50);
}

#[test]
fn env_vars_fill_in_when_flags_are_absent() {
    let _guard = env_lock();
    clear_env();
    env::set_var("PSIM_BRIDGE_URL", "ws://env-host:9090");
    env::set_var("PSIM_PERIOD_MS", "100");

    let config = Config::from_args_iter(["bin"]).unwrap();
    assert_eq!(config.bridge_url, "ws://env-host:9090");
    assert_eq!(config.period_ms, 100);

    clear_env();
}

#[test]
fn flags_override_env_vars() {
    let _guard = env_lock();
    clear_env();
    env::set_var("PSIM_COMMAND_TOPIC", "/from_env");

    let config = Config::from_args_iter(["bin", "--command-topic", "/from_flag"]).unwrap();
    assert_eq!(config.command_topic, "/from_flag");

    clear_env();
}

#[test]
fn unknown_flags_are_ignored() {
    let _guard = env_lock();
    clear_env();

    let config = Config::from_args_iter(["bin", "--frobnicate", "--period-ms", "25"]).unwrap();
    assert_eq!(config.period_ms, 25);
}

#[test]
fn non_numeric_period_is_rejected() {
    let _guard = env_lock();
    clear_env();

    let err = Config::from_args_iter(["bin", "--period-ms", "soon"]).unwrap_err();
    assert!(err.to_string().contains("soon"));
}

#[test]
fn zero_period_is_rejected() {
    let _guard = env_lock();
    clear_env();

    assert!(Config::from_args_iter(["bin", "--period-ms=0"]).is_err());
}

#[test]
fn invalid_period_from_env_is_rejected() {
    let _guard = env_lock();
    clear_env();
    env::set_var("PSIM_PERIOD_MS", "-20");

    assert!(Config::from_args_iter(["bin"]).is_err());

    clear_env();
}
