//! Error types for configuration parsing.

use thiserror::Error;

/// Structured errors emitted while reading a configuration document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The document root was not a JSON object.
    #[error("configuration section '{section}' must be an object")]
    InvalidDocument {
        /// Section being parsed.
        section: String,
    },
    /// Field contained an invalid value.
    #[error("invalid value for '{field}' in '{section}': {message}")]
    InvalidField {
        /// Section that failed validation.
        section: String,
        /// Field that failed validation.
        field: String,
        /// Human-readable error description.
        message: String,
    },
    /// Field did not exist in the target section.
    #[error("unknown field '{field}' in '{section}' settings")]
    UnknownField {
        /// Section where the unknown field was encountered.
        section: String,
        /// Name of the unexpected field.
        field: String,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_section_and_field() {
        let err = ConfigError::InvalidField {
            section: "search_form".into(),
            field: "debounce_ms".into(),
            message: "must be an integer".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for 'debounce_ms' in 'search_form': must be an integer"
        );

        let err = ConfigError::UnknownField {
            section: "search_form".into(),
            field: "colour".into(),
        };
        assert_eq!(
            err.to_string(),
            "unknown field 'colour' in 'search_form' settings"
        );
    }
}
