use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::models::price::Price;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/prices", get(list_prices))
        .route("/prices/:id", get(get_price))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "pricing-service",
        "status": "healthy",
    }))
}

async fn list_prices(State(state): State<AppState>) -> Json<Vec<Price>> {
    Json(state.prices.list().await)
}

async fn get_price(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Price>, AppError> {
    let vehicle_id = id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("'{}' is not a valid vehicle identifier", id)))?;
    Ok(Json(state.prices.get(vehicle_id).await))
}
