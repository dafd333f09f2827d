pub mod car_routes;

use axum::{routing::get, Json, Router};
use serde_json::json;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Full application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/cars", car_routes::create_car_router())
        .layer(cors_middleware())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "vehicles-api",
        "status": "healthy",
    }))
}
