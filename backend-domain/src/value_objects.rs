// Domain value objects
pub mod location;

pub use location::*;
