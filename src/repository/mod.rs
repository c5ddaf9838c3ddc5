mod client;
mod error;
mod models;

pub use client::{PropertyClient, PropertyRepository};
pub use error::ApiError;
pub use models::{Agent, Coordinates, Location, Property};

pub(crate) use client::select_by_id;
