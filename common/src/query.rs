//! Pure derivation of the rendered restaurant sequence from the
//! immutable dataset and the list controller's state.
//!
//! Filtering always runs before sorting; the two are independent. The
//! sequence is sorted ascending by the active key and then reversed as
//! a whole when the direction is descending, so toggling direction
//! yields the exact reverse of the ascending order.

use std::cmp::Ordering;

use crate::location::GeoLocation;
use crate::model::restaurant::Restaurant;

/// The three sortable columns of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive lexicographic order on `name`, with a
    /// case-sensitive tiebreak. Compares Unicode code points after
    /// lowercasing; no locale-specific collation rules are applied.
    Name,
    /// Numeric order on the enriched `delivery_price`.
    DeliveryPrice,
    /// Order by haversine distance from the viewer location, recomputed
    /// per comparison.
    Closest,
}

/// Derives the displayed sequence: case-insensitive substring filter on
/// `name`, then sort by `sort_key`, then reverse when descending.
///
/// An empty filter matches every record. An empty input slice yields an
/// empty sequence.
pub fn filter_and_sort(
    restaurants: &[Restaurant],
    filter: &str,
    sort_key: SortKey,
    ascending: bool,
    viewer: &GeoLocation,
) -> Vec<Restaurant> {
    let needle = filter.to_lowercase();

    let mut selected: Vec<Restaurant> = restaurants
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    selected.sort_by(|a, b| match sort_key {
        SortKey::Name => compare_names(&a.name, &b.name),
        SortKey::DeliveryPrice => a.delivery_price.total_cmp(&b.delivery_price),
        SortKey::Closest => viewer
            .distance_m(&a.location)
            .total_cmp(&viewer.distance_m(&b.location)),
    });

    if !ascending {
        selected.reverse();
    }

    selected
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
