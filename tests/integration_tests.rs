// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for building the configuration object.
//!
//! These tests cover the mode scenarios end to end and the provider behaviour seen
//! by a hosting application.

mod common;

use common::{create_precedence_sources, CountingModeSource, EnvGuard, MockFragmentSource};
use serde_json::json;
use std::sync::atomic::Ordering;
use storecfg::adapters::FixedModeAdapter;
use storecfg::domain::{ConfigError, Configuration, ConfigurationProvider, RuntimeMode};
use storecfg::load_config;
use storecfg::service::DefaultConfigProvider;

fn verification_disabled() -> serde_json::Value {
    json!({
        "projectConfig": {
            "database_extra": { "ssl": { "rejectUnauthorized": false } }
        }
    })
}

#[test]
fn test_development_scenario() {
    let config = load_config(&RuntimeMode::from("development"));
    assert_eq!(
        config.to_value().unwrap(),
        json!({ "projectConfig": { "database_extra": {} } })
    );
}

#[test]
fn test_production_scenario() {
    let config = load_config(&RuntimeMode::from("production"));
    assert_eq!(config.to_value().unwrap(), verification_disabled());
}

#[test]
fn test_unset_scenario() {
    let unset = load_config(&RuntimeMode::from_raw(None));
    let production = load_config(&RuntimeMode::from("production"));
    assert_eq!(unset, production);
    assert_eq!(unset.to_value().unwrap(), verification_disabled());
}

#[test]
fn test_test_mode_scenario() {
    let config = load_config(&RuntimeMode::from("test"));
    assert_eq!(config.to_value().unwrap(), verification_disabled());
}

#[test]
fn test_near_misses_are_not_development() {
    for value in ["", "Development", "DEVELOPMENT", "dev", "development ", "staging"] {
        let config = load_config(&RuntimeMode::from(value));
        assert_eq!(
            config.to_value().unwrap(),
            verification_disabled(),
            "mode {:?}",
            value
        );
    }
}

#[test]
fn test_load_config_is_idempotent() {
    for mode in [RuntimeMode::Development, RuntimeMode::from("production")] {
        assert_eq!(load_config(&mode), load_config(&mode));
    }
}

#[test]
fn test_provider_reads_mode_per_call() {
    let source = CountingModeSource::new(Some("development"));
    let reads = source.counter();
    let provider = DefaultConfigProvider::new(Box::new(source));
    assert_eq!(reads.load(Ordering::SeqCst), 0);

    let first = provider.load_config();
    assert_eq!(reads.load(Ordering::SeqCst), 1);
    let second = provider.load_config();
    assert_eq!(reads.load(Ordering::SeqCst), 2);

    assert_eq!(first, second);
    assert!(first.database_extra().is_empty());
}

#[test]
fn test_counting_source_reads() {
    use storecfg::ports::ModeSource;

    let source = CountingModeSource::new(None);
    let _ = source.runtime_mode();
    let _ = source.runtime_mode();
    assert_eq!(source.reads(), 2);
}

#[test]
fn test_configuration_unaffected_by_later_env_changes() {
    let mut guard = EnvGuard::new();
    guard.set("STORECFG_IT_SNAPSHOT_MODE", "development");

    let provider = DefaultConfigProvider::builder()
        .with_env_variable("STORECFG_IT_SNAPSHOT_MODE")
        .build()
        .unwrap();
    let config = provider.load_config();

    guard.set("STORECFG_IT_SNAPSHOT_MODE", "production");

    // Already built value keeps its shape; a new build sees the change
    assert!(config.database_extra().is_empty());
    assert!(!provider.load_config().database_extra().is_empty());
}

#[test]
fn test_env_provider_unset_variable() {
    let mut guard = EnvGuard::new();
    guard.unset("STORECFG_IT_NEVER_SET");

    let provider = DefaultConfigProvider::builder()
        .with_env_variable("STORECFG_IT_NEVER_SET")
        .build()
        .unwrap();

    assert_eq!(
        provider.load_config().to_value().unwrap(),
        verification_disabled()
    );
}

#[test]
fn test_fragment_precedence() {
    let (low, medium, high) = create_precedence_sources();

    let provider = DefaultConfigProvider::builder()
        .with_mode_source(Box::new(FixedModeAdapter::new("production")))
        .with_fragment_source(Box::new(medium))
        .with_fragment_source(Box::new(high))
        .with_fragment_source(Box::new(low))
        .build()
        .unwrap();

    let config = provider.load_config();

    assert_eq!(
        config.to_value().unwrap(),
        json!({
            "projectConfig": {
                "database_extra": { "ssl": { "rejectUnauthorized": false } },
                "redis_url": "redis://high",
                "store_cors": "*"
            },
            "plugins": ["medium"]
        })
    );
}

#[test]
fn test_fragments_cannot_override_database_extra() {
    let source = MockFragmentSource::new("sneaky", 9)
        .with_project("database_extra", json!({ "ssl": { "rejectUnauthorized": true } }));

    let result = DefaultConfigProvider::builder()
        .with_mode("production")
        .with_fragment_source(Box::new(source))
        .build();

    match result {
        Err(ConfigError::ReservedKey { key, source_name }) => {
            assert_eq!(key, "database_extra");
            assert_eq!(source_name, "sneaky");
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("reserved key was accepted"),
    }
}

#[test]
fn test_fragments_cannot_define_project_config() {
    let source = MockFragmentSource::new("sneaky", 1).with_top_level("projectConfig", json!({}));

    let result = DefaultConfigProvider::builder()
        .with_mode("development")
        .with_fragment_source(Box::new(source))
        .build();

    assert!(matches!(result, Err(ConfigError::ReservedKey { .. })));
}

#[test]
fn test_failing_fragment_source() {
    let source = MockFragmentSource::new("broken", 1).with_failure(true);

    let result = DefaultConfigProvider::builder()
        .with_mode("development")
        .with_fragment_source(Box::new(source))
        .build();

    assert!(matches!(result, Err(ConfigError::SourceError { .. })));
}

#[test]
fn test_configuration_is_shareable_across_threads() {
    let config = std::sync::Arc::new(Configuration::for_mode(&RuntimeMode::from("production")));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = std::sync::Arc::clone(&config);
            std::thread::spawn(move || config.database_extra().is_empty())
        })
        .collect();

    for handle in handles {
        assert!(!handle.join().unwrap());
    }
}
