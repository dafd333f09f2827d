//! Shared application state passed through the Axum router.

use std::sync::Arc;

use crate::repositories::price_repository::PriceRepository;

#[derive(Clone)]
pub struct AppState {
    pub prices: Arc<PriceRepository>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            prices: Arc::new(PriceRepository::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
