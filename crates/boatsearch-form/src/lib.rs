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
#![allow(clippy::module_name_repetitions)]

//! Boat search filter form.
//!
//! The form keeps the selected boat type and price range, broadcasts
//! [`SearchCriteria`] snapshots on an [`EventBus`], and turns boat type
//! records from a [`BoatTypeProvider`] into selectable options.
//!
//! Layout: `form.rs` (`SearchFilterForm`), `debounce.rs` (trailing-edge
//! timer), `options.rs` (records and option mapping), `provider.rs` (lookup
//! trait), `error.rs`.

pub mod debounce;
pub mod error;
pub mod form;
pub mod options;
pub mod provider;

pub use boatsearch_events::{EventBus, SearchCriteria, SearchTrigger};
pub use debounce::Debouncer;
pub use error::{FormError, FormResult};
pub use form::SearchFilterForm;
pub use options::{ALL_TYPES_LABEL, BoatType, CategoryOption, category_options};
pub use provider::BoatTypeProvider;
