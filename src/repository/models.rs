use serde::{Deserialize, Serialize};

// property
//  ├── location
//  │    ├── address
//  │    ├── city
//  │    ├── state
//  │    ├── zipCode
//  │    └── coordinates
//  │         ├── lat
//  │         └── lng
//  ├── agent
//  │    ├── name
//  │    ├── phone
//  │    └── email
//  └── facts
//       ├── price
//       ├── bedrooms / bathrooms
//       ├── area
//       ├── propertyType
//       └── yearBuilt

/// A single listing record as served by the remote source. Immutable once
/// fetched; `id` is unique across the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: Option<f64>,
    pub location: Location,

    pub image: String,
    pub images: Option<Vec<String>>,

    pub description: String,
    #[serde(rename = "propertyType")]
    pub property_type: String,
    #[serde(rename = "yearBuilt")]
    pub year_built: Option<u32>,
    pub features: Option<Vec<String>>,
    pub agent: Option<Agent>,

    // Raw source timestamps; parsed lazily where a view needs them.
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub phone: String,
    pub email: String,
}
