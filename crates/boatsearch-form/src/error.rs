//! Error types for the search form.

use std::error::Error;

use boatsearch_config::ConfigError;
use thiserror::Error;

/// Primary error type for form operations.
#[derive(Debug, Error)]
pub enum FormError {
    /// The boat type lookup failed; the option list was cleared.
    #[error("failed to fetch boat type options")]
    OptionsFetchFailed {
        /// Underlying provider failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// The form configuration failed validation.
    #[error("invalid search form configuration")]
    InvalidConfig {
        /// Validation failure.
        #[source]
        source: ConfigError,
    },
    /// The form was constructed outside a tokio runtime, so range changes
    /// could not be scheduled.
    #[error("no tokio runtime available for debounced emission")]
    RuntimeUnavailable {
        /// Runtime lookup failure.
        #[source]
        source: tokio::runtime::TryCurrentError,
    },
}

impl FormError {
    /// Wrap a provider failure.
    #[must_use]
    pub fn options_fetch_failed(err: anyhow::Error) -> Self {
        Self::OptionsFetchFailed { source: err.into() }
    }
}

/// Convenience alias for form results.
pub type FormResult<T> = Result<T, FormError>;
