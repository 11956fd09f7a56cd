//! Default field values for the search form.
//!
//! # Design
//! - Match the initial state a freshly rendered form shows to the user.

/// Quiet period before a price change is broadcast, in milliseconds.
pub(crate) const DEBOUNCE_MS: u64 = 1_000;
/// Initial lower price bound.
pub(crate) const MIN_PRICE: f64 = 0.0;
/// Initial upper price bound.
pub(crate) const MAX_PRICE: f64 = 1_000_000.0;
/// Replay ring size for the event bus.
pub(crate) const REPLAY_CAPACITY: usize = 256;
/// Upper limit accepted for the quiet period.
pub(crate) const MAX_DEBOUNCE_MS: u64 = 60_000;
