pub mod listing;
pub mod view;

pub use listing::{ListingCard, ListingDetails};
pub use view::filtered_view;
