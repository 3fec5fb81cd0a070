/// Shared application state
use encore_core::storage::StorageContext;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn StorageContext>,
}

impl AppState {
    pub fn new(db: Arc<dyn StorageContext>) -> Self {
        Self { db }
    }
}
