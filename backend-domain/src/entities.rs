// Domain entities

pub mod config;
pub mod credentials;
pub mod requests;
pub mod scan;

pub use config::*;
pub use credentials::*;
pub use requests::*;
pub use scan::*;
