use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::car_controller::CarController;
use crate::dto::car_dto::{CarResponse, DisabledRangeResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars))
        .route("/:id", get(get_car))
        .route("/:id/disabled-dates", get(get_disabled_dates))
}

async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<CarResponse>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CarResponse>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn get_disabled_dates(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<DisabledRangeResponse>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.disabled_dates(id).await?;
    Ok(Json(response))
}
