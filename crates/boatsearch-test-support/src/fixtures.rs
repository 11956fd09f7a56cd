//! Record and criteria fixtures.

use boatsearch_events::SearchCriteria;
use boatsearch_form::BoatType;

/// Upper price bound a fresh form starts with.
pub const DEFAULT_MAX_PRICE: f64 = 1_000_000.0;

/// A small catalogue of boat types in service order.
#[must_use]
pub fn boat_types() -> Vec<BoatType> {
    vec![
        BoatType::new("Sailboat", "1"),
        BoatType::new("Fishing Boat", "2"),
        BoatType::new("Yacht", "3"),
    ]
}

/// Criteria with the given type and bounds.
#[must_use]
pub fn criteria(boat_type_id: &str, min_price: f64, max_price: f64) -> SearchCriteria {
    SearchCriteria {
        boat_type_id: boat_type_id.to_string(),
        min_price,
        max_price,
    }
}

/// Criteria a fresh form broadcasts for `boat_type_id`.
#[must_use]
pub fn default_criteria(boat_type_id: &str) -> SearchCriteria {
    criteria(boat_type_id, 0.0, DEFAULT_MAX_PRICE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_ids_are_unique() {
        let records = boat_types();
        let mut ids: Vec<_> = records.iter().map(|record| record.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn default_criteria_uses_fresh_bounds() {
        let criteria = default_criteria("2");
        assert_eq!(criteria.boat_type_id, "2");
        assert_eq!(criteria.min_price, 0.0);
        assert_eq!(criteria.max_price, DEFAULT_MAX_PRICE);
    }
}
