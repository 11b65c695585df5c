pub mod auth_handlers;
pub mod map_handlers;
pub mod ops_handlers;
pub mod scan_handlers;

pub use auth_handlers::*;
pub use map_handlers::*;
pub use ops_handlers::*;
pub use scan_handlers::*;

#[derive(serde::Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
