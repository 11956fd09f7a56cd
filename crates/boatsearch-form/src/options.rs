//! Boat type records and the selectable options derived from them.

use serde::{Deserialize, Serialize};

/// Label of the synthetic option that clears the type filter.
pub const ALL_TYPES_LABEL: &str = "All Types";

/// Boat type record as returned by the lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoatType {
    /// Display name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Record identifier.
    #[serde(rename = "Id")]
    pub id: String,
}

impl BoatType {
    /// Build a record from its name and identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

/// One entry of the boat type selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    /// Text shown to the user.
    pub label: String,
    /// Identifier published as `boatTypeId` when selected.
    pub value: String,
}

impl CategoryOption {
    /// The "All Types" entry; selecting it publishes an empty type id.
    #[must_use]
    pub fn all_types() -> Self {
        Self {
            label: ALL_TYPES_LABEL.to_string(),
            value: String::new(),
        }
    }
}

impl From<BoatType> for CategoryOption {
    fn from(record: BoatType) -> Self {
        Self {
            label: record.name,
            value: record.id,
        }
    }
}

/// Map provider records to selector options, with "All Types" first.
///
/// Record order is preserved and duplicates are passed through.
#[must_use]
pub fn category_options(records: Vec<BoatType>) -> Vec<CategoryOption> {
    let mut options = Vec::with_capacity(records.len() + 1);
    options.push(CategoryOption::all_types());
    options.extend(records.into_iter().map(CategoryOption::from));
    options
}
