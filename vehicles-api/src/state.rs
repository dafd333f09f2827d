//! Shared application state passed through the Axum router.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::services::CarService;

#[derive(Clone)]
pub struct AppState {
    pub cars: Arc<CarService>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(cars: CarService, config: EnvironmentConfig) -> Self {
        Self {
            cars: Arc::new(cars),
            config,
        }
    }
}
