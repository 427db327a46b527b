// src/models/mod.rs
pub mod display;
pub mod quote;

// Re-export commonly used types so other modules can use `crate::models::X`
pub use display::{Frame, FramesResponse, Notification, Priority, Sound};
pub use quote::{HistoryEntry, PairKey, PairView, SpotEntry};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
