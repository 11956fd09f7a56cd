//! Validation helpers for configuration values.
//!
//! The `check_*` functions validate typed values; the `parse_*` functions
//! extract a value from a JSON document and then run the same check.

use serde_json::Value;

use crate::defaults::MAX_DEBOUNCE_MS;
use crate::error::{ConfigError, ConfigResult};

fn invalid(section: &str, field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidField {
        section: section.to_string(),
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn check_debounce_ms(millis: u64, section: &str, field: &str) -> ConfigResult<u64> {
    if millis > MAX_DEBOUNCE_MS {
        return Err(invalid(section, field, "must not exceed 60000"));
    }
    Ok(millis)
}

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn check_price(price: f64, section: &str, field: &str) -> ConfigResult<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(invalid(section, field, "must be a non-negative number"));
    }
    Ok(price)
}

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn check_capacity(capacity: usize, section: &str, field: &str) -> ConfigResult<usize> {
    if capacity == 0 {
        return Err(invalid(section, field, "must be positive"));
    }
    Ok(capacity)
}

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn parse_debounce_ms(value: &Value, section: &str, field: &str) -> ConfigResult<u64> {
    let millis = value
        .as_u64()
        .ok_or_else(|| invalid(section, field, "must be a non-negative integer"))?;
    check_debounce_ms(millis, section, field)
}

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn parse_price(value: &Value, section: &str, field: &str) -> ConfigResult<f64> {
    let price = value
        .as_f64()
        .ok_or_else(|| invalid(section, field, "must be a number"))?;
    check_price(price, section, field)
}

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn parse_capacity(value: &Value, section: &str, field: &str) -> ConfigResult<usize> {
    let capacity = value
        .as_u64()
        .ok_or_else(|| invalid(section, field, "must be an integer"))?;
    let capacity =
        usize::try_from(capacity).map_err(|_| invalid(section, field, "exceeds platform limits"))?;
    check_capacity(capacity, section, field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn debounce_accepts_range_and_rejects_outliers() {
        assert_eq!(parse_debounce_ms(&json!(0), "s", "f"), Ok(0));
        assert_eq!(parse_debounce_ms(&json!(1_000), "s", "f"), Ok(1_000));
        assert!(parse_debounce_ms(&json!(60_001), "s", "f").is_err());
        assert!(parse_debounce_ms(&json!(-5), "s", "f").is_err());
        assert!(parse_debounce_ms(&json!("1000"), "s", "f").is_err());
    }

    #[test]
    fn price_must_be_finite_and_non_negative() {
        assert_eq!(parse_price(&json!(12.5), "s", "f"), Ok(12.5));
        assert_eq!(parse_price(&json!(0), "s", "f"), Ok(0.0));
        let err = parse_price(&json!(-1), "s", "f").expect_err("negative price");
        assert!(matches!(err, ConfigError::InvalidField { ref message, .. } if message == "must be a non-negative number"));
        assert!(parse_price(&json!(null), "s", "f").is_err());
        assert!(check_price(f64::NAN, "s", "f").is_err());
        assert!(check_price(f64::INFINITY, "s", "f").is_err());
    }

    #[test]
    fn capacity_must_be_positive() {
        assert_eq!(parse_capacity(&json!(16), "s", "f"), Ok(16));
        assert!(parse_capacity(&json!(0), "s", "f").is_err());
        assert!(parse_capacity(&json!(1.5), "s", "f").is_err());
        assert!(check_capacity(0, "s", "f").is_err());
    }
}
