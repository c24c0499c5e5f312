//! Handler modules for HTTP endpoints.

pub mod http;

// Re-export HTTP handlers
pub use http::{check_room_status, health_check};
