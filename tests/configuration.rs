//! Configuration loading and validation tests

use dishcover::config::{Config, ServerConfig, SourceKind};
use dishcover_recipe::MatchMode;

fn base_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        source: Default::default(),
        matcher: Default::default(),
        discovery: Default::default(),
        observability: Default::default(),
    }
}

#[test]
fn test_load_applies_defaults() {
    let config = Config::load(None).expect("defaults must load");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.source.kind, SourceKind::Mock);
    assert_eq!(config.matcher.mode, MatchMode::Substring);
    assert_eq!(config.discovery.request_timeout_secs, 10);
    assert_eq!(config.observability.log_level, "info");
    config.validate().expect("defaults must validate");
}

#[test]
fn test_validate_rejects_port_zero() {
    let mut config = base_config();
    config.server.port = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_timeouts() {
    let mut config = base_config();
    config.discovery.request_timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_a_bad_remote_base_url() {
    let mut config = base_config();
    config.source.kind = SourceKind::Remote;
    config.source.base_url = "not a url".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_accepts_a_remote_source_with_a_real_url() {
    let mut config = base_config();
    config.source.kind = SourceKind::Remote;
    config.source.base_url = "https://recipes.example.com/api/".to_string();
    config.validate().expect("remote config must validate");
}

#[test]
fn test_mock_source_never_needs_a_base_url() {
    let mut config = base_config();
    config.source.base_url = "not a url".to_string();
    config
        .validate()
        .expect("the mock source must work without a reachable backend");
}
