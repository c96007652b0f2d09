//! Property domain entities.

pub mod filter;
pub mod model;
pub mod status;

pub use filter::PropertyFilters;
pub use model::{CreateProperty, Property, UpdateProperty};
pub use status::{PropertyStatus, PropertyType};
