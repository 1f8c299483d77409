// Shared types used across HTTP handlers
pub mod pagination;

pub use pagination::*;
