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

//! Typed configuration for the boat search form.
//!
//! Layout: `model.rs` (`FormConfig`), `validate.rs` (field parsing for JSON
//! documents), `defaults.rs` (initial field values), `error.rs`.

mod defaults;
pub mod error;
pub mod model;
mod validate;

pub use error::{ConfigError, ConfigResult};
pub use model::{FORM_SECTION, FormConfig};
