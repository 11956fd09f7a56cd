//! Event payload types carried from the search form to its listeners.

use chrono::{DateTime, Utc};

/// Identifier assigned to each event published on the bus.
pub type EventId = u64;

/// Default buffer size for the in-memory replay ring.
pub const DEFAULT_REPLAY_CAPACITY: usize = 256;

/// Snapshot of the search parameters broadcast to listeners.
///
/// An empty `boat_type_id` means no type filter. The price bounds are passed
/// through as entered; an inverted range (`min_price > max_price`) is legal
/// and left to consumers.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    /// Selected boat type identifier, or empty for all types.
    pub boat_type_id: String,
    /// Lower price bound.
    pub min_price: f64,
    /// Upper price bound.
    pub max_price: f64,
}

/// Interaction that produced a search event.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SearchTrigger {
    /// Boat type selection changed; emitted without delay.
    Selection,
    /// Price range changed; emitted once the quiet period elapsed.
    Range,
    /// Explicit form submission.
    Submit,
}

impl SearchTrigger {
    /// Stable label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Selection => "selection",
            Self::Range => "range",
            Self::Submit => "submit",
        }
    }
}

/// Typed events surfaced by the search form.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The filter criteria changed and listeners should re-run their query.
    Search {
        /// Full criteria snapshot at emission time.
        criteria: SearchCriteria,
        /// Interaction that caused the emission.
        trigger: SearchTrigger,
    },
}

impl Event {
    /// Machine-friendly discriminator for listeners.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Search { .. } => "search",
        }
    }

    /// Criteria carried by a search event.
    #[must_use]
    pub const fn criteria(&self) -> &SearchCriteria {
        match self {
            Self::Search { criteria, .. } => criteria,
        }
    }
}

/// Metadata wrapper around events. Each envelope tracks the event id and emission timestamp.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct EventEnvelope {
    /// Monotonic identifier assigned to the wrapped event.
    pub id: EventId,
    /// Timestamp recording when the envelope was produced.
    pub timestamp: DateTime<Utc>,
    /// Wrapped event payload.
    pub event: Event,
}
