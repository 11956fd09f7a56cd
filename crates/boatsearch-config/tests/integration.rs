use boatsearch_config::{ConfigError, FORM_SECTION, FormConfig};
use serde_json::json;
use std::time::Duration;

#[test]
fn document_overrides_every_field() -> anyhow::Result<()> {
    let config = FormConfig::from_document(&json!({
        "debounce_ms": 300,
        "default_min_price": 5_000,
        "default_max_price": 75_000.5,
        "replay_capacity": 8
    }))?;

    assert_eq!(config.quiet_period(), Duration::from_millis(300));
    assert_eq!(config.default_min_price, 5_000.0);
    assert_eq!(config.default_max_price, 75_000.5);
    assert_eq!(config.replay_capacity, 8);
    Ok(())
}

#[test]
fn inverted_default_range_is_accepted() -> anyhow::Result<()> {
    let config = FormConfig::from_document(&json!({
        "default_min_price": 900,
        "default_max_price": 100
    }))?;
    assert!(config.default_min_price > config.default_max_price);
    Ok(())
}

#[test]
fn first_invalid_field_is_reported() {
    let err = FormConfig::from_document(&json!({"replay_capacity": 0}))
        .expect_err("zero capacity must be rejected");
    assert_eq!(
        err,
        ConfigError::InvalidField {
            section: FORM_SECTION.into(),
            field: "replay_capacity".into(),
            message: "must be positive".into(),
        }
    );
}

#[test]
fn config_round_trips_through_json() -> anyhow::Result<()> {
    let config = FormConfig {
        debounce_ms: 50,
        ..FormConfig::default()
    };
    let value = serde_json::to_value(&config)?;
    assert_eq!(FormConfig::from_document(&value)?, config);
    Ok(())
}
