// HTTP routes
pub mod health;
pub mod resources;

pub use health::*;
pub use resources::*;
