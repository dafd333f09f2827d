use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::car_dto::CarRequest;
use crate::models::car::Car;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route("/:id", get(get_car).put(update_car).delete(delete_car))
}

async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<Car>>, AppError> {
    let cars = state.cars.list().await?;
    Ok(Json(cars))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Car>, AppError> {
    let car = state.cars.find_by_id(id).await?;
    Ok(Json(car))
}

async fn create_car(
    State(state): State<AppState>,
    Json(request): Json<CarRequest>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    request.validate()?;
    let car = state.cars.save(None, request.into_input()).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CarRequest>,
) -> Result<Json<Car>, AppError> {
    request.validate()?;
    let car = state.cars.save(Some(id), request.into_input()).await?;
    Ok(Json(car))
}

async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.cars.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
