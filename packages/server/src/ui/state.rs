//! Server state.

use std::sync::Arc;

use crate::domain::VideoProvider;

/// Shared application state
pub struct AppState {
    /// VideoProvider（外部サービスの抽象化）
    pub provider: Arc<dyn VideoProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn VideoProvider>) -> Self {
        Self { provider }
    }
}
