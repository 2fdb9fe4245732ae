use std::collections::HashMap;

use super::*;

fn parse(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn defaults_when_environment_is_empty() {
    let cfg = parse(&[]).unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, log_filter: DEFAULT_LOG_FILTER.to_owned() });
}

#[test]
fn port_is_parsed() {
    assert_eq!(parse(&[("PORT", "8080")]).unwrap().port, 8080);
    assert_eq!(parse(&[("PORT", " 8081 ")]).unwrap().port, 8081);
}

#[test]
fn blank_port_uses_default() {
    assert_eq!(parse(&[("PORT", "  ")]).unwrap().port, DEFAULT_PORT);
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(parse(&[("PORT", "http")]).unwrap_err(), ConfigError::InvalidPort { value: "http".to_owned() });
    assert_eq!(parse(&[("PORT", "70000")]).unwrap_err(), ConfigError::InvalidPort { value: "70000".to_owned() });
}

#[test]
fn log_filter_prefers_log_filter_over_rust_log() {
    let cfg = parse(&[("LOG_FILTER", "conectar=debug"), ("RUST_LOG", "warn")]).unwrap();
    assert_eq!(cfg.log_filter, "conectar=debug");
}

#[test]
fn log_filter_falls_back_to_rust_log() {
    assert_eq!(parse(&[("RUST_LOG", "warn")]).unwrap().log_filter, "warn");
}

#[test]
fn config_error_messages() {
    assert_eq!(ConfigError::InvalidPort { value: "x".into() }.to_string(), "invalid PORT value 'x'");
    assert_eq!(ConfigError::Leptos("missing".into()).to_string(), "leptos configuration: missing");
}
