//! Request parsing helpers shared by the controllers and handlers.

pub mod path;

pub use path::parse_id;
