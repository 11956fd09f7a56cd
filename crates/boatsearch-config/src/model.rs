//! Typed configuration model for the search form.
//!
//! # Design
//! - Pure data carrier; parsing of loosely typed documents lives in `validate.rs`.
//! - Missing fields fall back to the defaults a fresh form starts with.
//! - Deserialization goes through [`FormConfig::from_document`], so serde
//!   input is validated the same way as raw documents.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::defaults;
use crate::error::{ConfigError, ConfigResult};
use crate::validate::{
    check_capacity, check_debounce_ms, check_price, parse_capacity, parse_debounce_ms, parse_price,
};

/// Section name used in validation errors.
pub const FORM_SECTION: &str = "search_form";

/// Tunables for a search form instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct FormConfig {
    /// Quiet period before a price change is broadcast, in milliseconds.
    pub debounce_ms: u64,
    /// Lower price bound the form starts with.
    pub default_min_price: f64,
    /// Upper price bound the form starts with.
    pub default_max_price: f64,
    /// Replay ring size for the event bus the form publishes to.
    pub replay_capacity: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            debounce_ms: defaults::DEBOUNCE_MS,
            default_min_price: defaults::MIN_PRICE,
            default_max_price: defaults::MAX_PRICE,
            replay_capacity: defaults::REPLAY_CAPACITY,
        }
    }
}

impl FormConfig {
    /// Quiet period as a [`Duration`].
    #[must_use]
    pub const fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Build a configuration from a JSON object, validating each present
    /// field and defaulting the rest.
    ///
    /// The price defaults are not checked against each other; an inverted
    /// range is accepted the same way user input is.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document is not an object, contains an
    /// unknown key, or a field fails validation.
    pub fn from_document(document: &Value) -> ConfigResult<Self> {
        let map = document
            .as_object()
            .ok_or_else(|| ConfigError::InvalidDocument {
                section: FORM_SECTION.to_string(),
            })?;

        let mut config = Self::default();
        for (key, value) in map {
            match key.as_str() {
                "debounce_ms" => config.debounce_ms = parse_debounce_ms(value, FORM_SECTION, key)?,
                "default_min_price" => {
                    config.default_min_price = parse_price(value, FORM_SECTION, key)?;
                }
                "default_max_price" => {
                    config.default_max_price = parse_price(value, FORM_SECTION, key)?;
                }
                "replay_capacity" => {
                    config.replay_capacity = parse_capacity(value, FORM_SECTION, key)?;
                }
                other => {
                    return Err(ConfigError::UnknownField {
                        section: FORM_SECTION.to_string(),
                        field: other.to_string(),
                    });
                }
            }
        }
        Ok(config)
    }

    /// Check every field of an already built configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidField`] found.
    pub fn validate(&self) -> ConfigResult<()> {
        check_debounce_ms(self.debounce_ms, FORM_SECTION, "debounce_ms")?;
        check_price(self.default_min_price, FORM_SECTION, "default_min_price")?;
        check_price(self.default_max_price, FORM_SECTION, "default_max_price")?;
        check_capacity(self.replay_capacity, FORM_SECTION, "replay_capacity")?;
        Ok(())
    }
}

impl TryFrom<Value> for FormConfig {
    type Error = ConfigError;

    fn try_from(document: Value) -> ConfigResult<Self> {
        Self::from_document(&document)
    }
}
