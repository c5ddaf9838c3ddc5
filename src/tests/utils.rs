use crate::repository::{Location, Property};

/// Builds a minimal listing fixture; tests override the fields they care
/// about.
pub fn sample_property(id: &str, title: &str, bedrooms: u32, price: f64) -> Property {
    Property {
        id: id.to_string(),
        title: title.to_string(),
        price,
        bedrooms,
        bathrooms: 1,
        area: Some(1200.0),
        location: Location {
            address: format!("{id} Main St"),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
            coordinates: None,
        },
        image: "https://example.com/image.jpg".to_string(),
        images: None,
        description: "A lovely home.".to_string(),
        property_type: "House".to_string(),
        year_built: Some(1998),
        features: None,
        agent: None,
        created_at: "2024-01-15T10:30:00Z".to_string(),
        updated_at: "2024-01-20T10:30:00Z".to_string(),
    }
}
