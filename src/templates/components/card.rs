use crate::domain::ListingCard;
use maud::{html, Markup};

/// One listing card in the results grid.
pub fn listing_card(listing: &ListingCard) -> Markup {
    html! {
        article class="property-card" {
            div class="property-card__media" {
                img src=(listing.image) alt=(listing.title)
                    onerror="this.src='/static/placeholder.jpg'";
                span class="property-card__type" { (listing.property_type) }
            }
            div class="property-card__body" {
                h2 class="property-card__title" { (listing.title) }
                p class="property-card__price" { (listing.price) }
                p class="property-card__facts" {
                    (listing.bedrooms) " bd | " (listing.bathrooms) " ba"
                    @if let Some(area) = &listing.area {
                        " | " (area)
                    }
                }
                p class="property-card__location" {
                    (listing.address) ", " (listing.city)
                }
            }
        }
    }
}
