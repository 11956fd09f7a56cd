#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Event bus carrying search criteria from the filter form to its listeners.
//!
//! Layout: `payloads.rs` (event and criteria types), `routing.rs` (`EventBus`
//! and `EventStream`).

pub mod payloads;
pub mod routing;

pub use payloads::{
    DEFAULT_REPLAY_CAPACITY, Event, EventEnvelope, EventId, SearchCriteria, SearchTrigger,
};
pub use routing::{EventBus, EventStream};
