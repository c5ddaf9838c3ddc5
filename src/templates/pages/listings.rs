// templates/pages/listings.rs

use crate::domain::{filtered_view, ListingCard};
use crate::repository::Property;
use crate::store::FilterCriteria;
use crate::templates::{
    components::{empty_state, error_state, listing_card},
    desktop_layout,
};
use maud::{html, Markup};

/// The main results page. The visible subset is recomputed from the current
/// snapshots of both stores on every render.
pub fn listings_page(
    properties: &[Property],
    criteria: &FilterCriteria,
    loading: bool,
    error: Option<&str>,
) -> Markup {
    if loading {
        return desktop_layout("Real Estate Dashboard", loading_grid());
    }

    if let Some(message) = error {
        return desktop_layout("Real Estate Dashboard", error_state(message));
    }

    let visible = filtered_view(properties, criteria);
    let has_active_filters = !criteria.search_query.trim().is_empty()
        || criteria.min_bedrooms.is_some()
        || criteria.sort_by.is_some();

    desktop_layout(
        "Real Estate Dashboard",
        html! {
            section class="property-list" {
                div class="property-list__header" {
                    h2 class="property-list__title" { "Properties" }
                    p class="property-list__count" {
                        (visible.len())
                        @if visible.len() == 1 { " property found" } @else { " properties found" }
                    }
                }
                @if visible.is_empty() {
                    (empty_state(has_active_filters))
                } @else {
                    div class="property-list__grid" {
                        @for property in &visible {
                            (listing_card(&ListingCard::from_property(property)))
                        }
                    }
                }
            }
        },
    )
}

fn loading_grid() -> Markup {
    html! {
        div class="property-list__loading-grid" {
            @for _ in 0..8 {
                div class="property-card-skeleton" {
                    div class="property-card-skeleton__image" {}
                    div class="property-card-skeleton__line property-card-skeleton__line--title" {}
                    div class="property-card-skeleton__line property-card-skeleton__line--details" {}
                }
            }
        }
    }
}
