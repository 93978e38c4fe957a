//! End-to-end config loading tests.

use balancer_config::config::{
    BalancerConfig, ConfigError, DocumentSource, FileSource, Found, Severity, DEFAULT_TEMPLATE,
};
use balancer_config::load_config;

mod common;

#[test]
fn test_template_file_matches_defaults() {
    let file = common::write_config(DEFAULT_TEMPLATE);
    let loaded = load_config(file.path()).unwrap();

    assert_eq!(loaded.config, BalancerConfig::from_defaults());
    assert!(loaded.diagnostic.is_none());
}

#[test]
fn test_partial_override() {
    let file = common::write_config(r#"{"serverURLs": ["a.com","b.com"], "stickySession": true}"#);
    let (config, diagnostic) = load_config(file.path()).unwrap().into_parts();

    let mut expected = BalancerConfig::from_defaults();
    expected.server_urls = vec!["a.com".into(), "b.com".into()];
    expected.sticky_session = true;

    assert_eq!(config, expected);
    assert!(diagnostic.is_none());
}

#[test]
fn test_custom_config_differs_from_defaults() {
    let file = common::write_config(
        r#"{
            "serverURLs": ["backend1.url.com", "backend2.url.com"],
            "balancingAlgorithmName": "w_round_robin",
            "serverTimeoutSeconds": 120,
            "failedHealthChecksTillTimeout": 3,
            "slowStart": true,
            "slowStartSeconds": 10,
            "stickySession": false
        }"#,
    );
    let config = load_config(file.path()).unwrap().config;

    assert_ne!(config, BalancerConfig::from_defaults());
    assert_eq!(config.balancing_algorithm_name, "w_round_robin");
    assert_eq!(config.server_timeout_seconds, 120);
    assert_eq!(config.failed_health_checks_till_timeout, 3);
    assert_eq!(config.slow_start_seconds, 10);
}

#[test]
fn test_loading_twice_is_idempotent() {
    let file = common::write_config(r#"{"slowStart": true, "slowStartSeconds": 30}"#);
    let first = load_config(file.path()).unwrap();
    let second = load_config(file.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_defaults_round_trip() {
    let defaults = BalancerConfig::from_defaults();
    let text = serde_json::to_string(&defaults.to_document()).unwrap();
    let file = common::write_config(&text);

    let loaded = load_config(file.path()).unwrap();
    assert_eq!(loaded.config, defaults);
    assert!(loaded.diagnostic.is_none());
}

#[test]
fn test_zero_timeout_accepted() {
    let file = common::write_config(r#"{"serverTimeoutSeconds": 0}"#);
    assert_eq!(load_config(file.path()).unwrap().config.server_timeout_seconds, 0);
}

#[test]
fn test_negative_timeout_rejected() {
    let file = common::write_config(r#"{"serverTimeoutSeconds": -1}"#);
    let err = load_config(file.path()).unwrap_err();
    assert_eq!(err.field(), Some("serverTimeoutSeconds"));
    assert_eq!(err.severity(), Severity::Fatal);
}

#[test]
fn test_boolean_timeout_rejected() {
    let file = common::write_config(r#"{"serverTimeoutSeconds": true}"#);
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::TypeMismatch { field: "serverTimeoutSeconds", found: Found::Kind(_), .. }
    ));
    assert!(err.to_string().contains("serverTimeoutSeconds"));
}

#[test]
fn test_empty_url_list_accepted() {
    let file = common::write_config(r#"{"serverURLs": []}"#);
    let loaded = load_config(file.path()).unwrap();
    assert!(loaded.config.server_urls.is_empty());
    assert!(loaded.diagnostic.is_none());
}

#[test]
fn test_non_string_url_rejected() {
    let file = common::write_config(r#"{"serverURLs": ["a.com", false]}"#);
    let err = load_config(file.path()).unwrap_err();
    assert_eq!(err.field(), Some("serverURLs"));
}

#[test]
fn test_unknown_field_is_non_fatal() {
    let file = common::write_config(
        r#"{
            "serverURLs": ["a.com"],
            "balancingAlgorithmName": "round_robin",
            "serverTimeoutSeconds": 60,
            "failedHealthChecksTillTimeout": 3,
            "slowStart": false,
            "slowStartSeconds": 120,
            "stickySession": false,
            "unknownField": true
        }"#,
    );
    let (config, diagnostic) = load_config(file.path()).unwrap().into_parts();

    assert_eq!(config.server_urls, vec!["a.com"]);
    let diagnostic = diagnostic.unwrap();
    assert_eq!(diagnostic.severity(), Severity::NonFatal);
    assert_eq!(diagnostic.unknown_fields().collect::<Vec<_>>(), vec!["unknownField"]);
    assert!(diagnostic.to_string().contains("unknownField"));
}

#[test]
fn test_malformed_document_rejected() {
    let file = common::write_config(r#"{"serverURLs": ["a.com""#);
    assert!(matches!(load_config(file.path()), Err(ConfigError::Parse { .. })));
}

#[test]
fn test_empty_path_rejected_before_io() {
    assert!(matches!(FileSource::new(""), Err(ConfigError::EmptyPath)));
    assert!(matches!(load_config(""), Err(ConfigError::EmptyPath)));
}

#[test]
fn test_missing_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_file_source_describes_path() {
    let file = common::write_config("{}");
    let source = FileSource::new(file.path()).unwrap();
    assert_eq!(source.path(), file.path());
    assert_eq!(source.describe(), file.path().display().to_string());

    let loaded = BalancerConfig::from_source(&source).unwrap();
    assert_eq!(loaded.config, BalancerConfig::default());
}
