// templates/pages/details.rs

use crate::domain::ListingDetails;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Full details for one listing. Optional facts render only when present.
pub fn details_page(details: &ListingDetails) -> Markup {
    let card = &details.card;

    desktop_layout(
        &card.title,
        html! {
            article class="property-details" {
                div class="property-details__gallery" {
                    @for image in &details.images {
                        img src=(image) alt=(card.title)
                            onerror="this.src='/static/placeholder.jpg'";
                    }
                }

                h1 { (card.title) }
                p class="property-details__price" { (card.price) }
                p class="property-details__address" {
                    (card.address) ", " (card.city) ", " (details.state) " " (details.zip_code)
                }

                ul class="property-details__facts" {
                    li { (card.bedrooms) " bedrooms" }
                    li { (card.bathrooms) " bathrooms" }
                    @if let Some(area) = &card.area { li { (area) } }
                    li { (card.property_type) }
                    @if let Some(year) = details.year_built { li { "Built in " (year) } }
                    @if let Some(listed) = &details.listed_on { li { "Listed " (listed) } }
                }

                p class="property-details__description" { (details.description) }

                @if !details.features.is_empty() {
                    section class="property-details__features" {
                        h2 { "Features" }
                        ul {
                            @for feature in &details.features { li { (feature) } }
                        }
                    }
                }

                @if let Some(agent) = &details.agent {
                    section class="property-details__agent" {
                        h2 { "Listing Agent" }
                        p { (agent.name) }
                        p { a href={ "tel:" (agent.phone) } { (agent.phone) } }
                        p { a href={ "mailto:" (agent.email) } { (agent.email) } }
                    }
                }
            }
        },
    )
}
