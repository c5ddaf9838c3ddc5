// src/domain/view.rs

use crate::repository::Property;
use crate::store::{FilterCriteria, SortOrder};

/// Derives the visible, ordered subset of the listing collection from the
/// current filter criteria.
///
/// A pure function of its two snapshots: it performs no I/O and never
/// mutates the input collection, so recomputing with unchanged inputs
/// yields an identical sequence. Filters narrow in a fixed order (search,
/// then bedrooms) and the sort is stable, so listings with equal prices keep
/// their repository order. When no sort is selected the filtered subset
/// stays in repository order.
pub fn filtered_view(properties: &[Property], criteria: &FilterCriteria) -> Vec<Property> {
    let mut filtered: Vec<Property> = properties.to_vec();

    // A whitespace-only query is no constraint at all.
    let query = criteria.search_query.trim().to_lowercase();
    if !query.is_empty() {
        filtered.retain(|property| {
            property.title.to_lowercase().contains(&query)
                || property.location.address.to_lowercase().contains(&query)
                || property.location.city.to_lowercase().contains(&query)
        });
    }

    if let Some(min_bedrooms) = criteria.min_bedrooms {
        filtered.retain(|property| property.bedrooms >= min_bedrooms);
    }

    if let Some(sort) = criteria.sort_by {
        filtered.sort_by(|a, b| match sort {
            SortOrder::PriceAscending => a.price.total_cmp(&b.price),
            SortOrder::PriceDescending => b.price.total_cmp(&a.price),
        });
    }

    filtered
}
