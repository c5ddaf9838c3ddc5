// src/domain/listing.rs

use crate::repository::{Agent, Property};
use chrono::{DateTime, Utc};

/// A listing flattened for card rendering. Display strings are formatted
/// here so templates stay free of formatting logic, and every absent or
/// invalid fact degrades to omission.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCard {
    pub id: String,
    pub title: String,
    pub price: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: Option<String>,
    pub address: String,
    pub city: String,
    pub property_type: String,
    pub image: String,
}

impl ListingCard {
    pub fn from_property(property: &Property) -> Self {
        Self {
            id: property.id.clone(),
            title: property.title.clone(),
            price: format_price(property.price),
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            area: format_area(property.area),
            address: property.location.address.clone(),
            city: property.location.city.clone(),
            property_type: property.property_type.clone(),
            image: property.image.clone(),
        }
    }
}

/// The details view adds the slower-moving facts the card leaves out.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDetails {
    pub card: ListingCard,
    pub description: String,
    pub state: String,
    pub zip_code: String,
    pub year_built: Option<u32>,
    pub features: Vec<String>,
    pub agent: Option<Agent>,
    pub images: Vec<String>,
    pub listed_on: Option<String>,
}

impl ListingDetails {
    pub fn from_property(property: &Property) -> Self {
        Self {
            card: ListingCard::from_property(property),
            description: property.description.clone(),
            state: property.location.state.clone(),
            zip_code: property.location.zip_code.clone(),
            year_built: property.year_built,
            features: property.features.clone().unwrap_or_default(),
            agent: property.agent.clone(),
            // The gallery falls back to the primary image when the source
            // ships no extra shots.
            images: property
                .images
                .clone()
                .unwrap_or_else(|| vec![property.image.clone()]),
            listed_on: format_listed_date(&property.created_at),
        }
    }
}

/// "$1,234,567". Listing prices are whole dollars; any fractional amount in
/// the payload is truncated for display.
pub fn format_price(price: f64) -> String {
    format!("${}", group_thousands(price.max(0.0) as u64))
}

/// "1,850 sqft". Absent or non-finite areas are omitted entirely rather
/// than shown as a bogus number.
pub fn format_area(area: Option<f64>) -> Option<String> {
    let area = area?;
    if !area.is_finite() || area < 0.0 {
        return None;
    }
    Some(format!("{} sqft", group_thousands(area as u64)))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Parses the source's RFC 3339 timestamp for the "listed on" line. An
/// unparsable timestamp drops the line instead of failing the view.
fn format_listed_date(created_at: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(created_at)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).format("%B %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{Coordinates, Location};

    fn property() -> Property {
        Property {
            id: "p-1".to_string(),
            title: "Lake House".to_string(),
            price: 300000.0,
            bedrooms: 3,
            bathrooms: 2,
            area: Some(1850.0),
            location: Location {
                address: "12 Shoreline Dr".to_string(),
                city: "Madison".to_string(),
                state: "WI".to_string(),
                zip_code: "53703".to_string(),
                coordinates: Some(Coordinates {
                    lat: 43.07,
                    lng: -89.4,
                }),
            },
            image: "https://example.com/lake.jpg".to_string(),
            images: None,
            description: "Three bedrooms on the water.".to_string(),
            property_type: "House".to_string(),
            year_built: Some(1987),
            features: None,
            agent: None,
            created_at: "2024-01-15T10:30:00Z".to_string(),
            updated_at: "2024-01-20T10:30:00Z".to_string(),
        }
    }

    #[test]
    fn test_price_and_area_formatting() {
        assert_eq!(format_price(300000.0), "$300,000");
        assert_eq!(format_price(1500.5), "$1,500");
        assert_eq!(format_price(950.0), "$950");
        assert_eq!(format_price(1234567.0), "$1,234,567");

        assert_eq!(format_area(Some(1850.0)), Some("1,850 sqft".to_string()));
        assert_eq!(format_area(Some(f64::NAN)), None);
        assert_eq!(format_area(None), None);
    }

    #[test]
    fn test_card_degrades_missing_area() {
        let mut prop = property();
        prop.area = None;

        let card = ListingCard::from_property(&prop);
        assert_eq!(card.area, None);
        assert_eq!(card.price, "$300,000");
    }

    #[test]
    fn test_details_parse_listed_date_and_gallery_fallback() {
        let prop = property();
        let details = ListingDetails::from_property(&prop);

        assert_eq!(details.listed_on, Some("January 15, 2024".to_string()));
        // No extra shots, so the gallery holds just the primary image.
        assert_eq!(details.images, vec!["https://example.com/lake.jpg"]);

        let mut undated = property();
        undated.created_at = "yesterday-ish".to_string();
        let details = ListingDetails::from_property(&undated);
        assert_eq!(details.listed_on, None);
    }
}
