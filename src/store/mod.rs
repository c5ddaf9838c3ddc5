pub mod filters;
pub mod properties;

pub use filters::{FilterCriteria, FilterStore, SortOrder};
pub use properties::PropertyStore;
