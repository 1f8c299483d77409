//! Domain data types.

pub mod category;
pub mod resource;

pub use category::CanonicalCategory;
pub use resource::{Resource, ResourceDocument};
