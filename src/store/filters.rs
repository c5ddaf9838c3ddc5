// src/store/filters.rs

/// Price ordering applied to the visible listing set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    PriceAscending,
    PriceDescending,
}

/// The user-controlled constraints applied to the listing collection.
///
/// `None` always means "no constraint". It is never encoded as a sentinel
/// number, so "no minimum" and "minimum of zero" stay distinct states.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub search_query: String,
    pub min_bedrooms: Option<u32>,
    pub sort_by: Option<SortOrder>,
}

/// Owns the session's single criteria snapshot and constrains mutation to
/// this API. Every mutation is synchronous and immediately observable.
#[derive(Debug, Default)]
pub struct FilterStore {
    criteria: FilterCriteria,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.criteria.search_query = query.to_string();
    }

    pub fn set_min_bedrooms(&mut self, bedrooms: Option<u32>) {
        self.criteria.min_bedrooms = bedrooms;
    }

    pub fn set_sort_by(&mut self, sort: Option<SortOrder>) {
        self.criteria.sort_by = sort;
    }

    /// Resets all three constraints in one step, so no reader can observe a
    /// partially-cleared snapshot.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }
}
