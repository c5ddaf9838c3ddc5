use std::error::Error;
use std::fmt;

/// Failures surfaced by the listing repository.
///
/// `Fetch` carries the transport detail for diagnostics, but displays as a
/// fixed user-safe message so raw transport errors never reach the UI.
#[derive(Debug)]
pub enum ApiError {
    Fetch(String),
    NotFound(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Fetch(_) => {
                write!(f, "Failed to fetch properties. Please try again later.")
            }
            ApiError::NotFound(id) => write!(f, "No property found with id {id}"),
        }
    }
}

impl Error for ApiError {}
