// src/store/properties.rs

use crate::repository::{Property, PropertyRepository};

/// Session state around the fetched listing collection.
///
/// The collection is replaced wholesale by each successful fetch and is
/// never partially updated. A failed fetch discards the previous collection
/// rather than serving stale data; callers surface the error and offer a
/// retry. Overlapping fetches are not cancelled, so the last one to resolve
/// wins.
pub struct PropertyStore<R> {
    repository: R,
    properties: Vec<Property>,
    selected: Option<Property>,
    loading: bool,
    error: Option<String>,
}

impl<R: PropertyRepository> PropertyStore<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            properties: Vec::new(),
            selected: None,
            loading: false,
            error: None,
        }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn selected_property(&self) -> Option<&Property> {
        self.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the collection with the latest snapshot from the source.
    pub fn fetch_properties(&mut self) {
        self.loading = true;
        self.error = None;

        match self.repository.fetch_all() {
            Ok(properties) => {
                self.properties = properties;
            }
            Err(e) => {
                self.properties.clear();
                self.error = Some(e.to_string());
            }
        }

        self.loading = false;
    }

    /// Resolves one listing for the details view.
    pub fn fetch_property_by_id(&mut self, id: &str) {
        self.loading = true;
        self.error = None;

        match self.repository.fetch_by_id(id) {
            Ok(property) => {
                self.selected = Some(property);
            }
            Err(e) => {
                self.selected = None;
                self.error = Some(e.to_string());
            }
        }

        self.loading = false;
    }

    pub fn set_selected_property(&mut self, property: Option<Property>) {
        self.selected = property;
    }

    /// Errors are sticky until cleared here or a new fetch begins.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
