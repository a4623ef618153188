use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest, QuoteParams, QuoteResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::{AppJson, AppQuery};

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/", get(list_bookings))
        .route("/:id", get(get_booking))
}

pub fn create_quote_router() -> Router<AppState> {
    Router::new().route("/", get(get_quote))
}

async fn create_booking(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingResponse>>), AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.submit(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingResponse>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.list_recent().await?;
    Ok(Json(response))
}

async fn get_quote(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<QuoteParams>,
) -> Result<Json<QuoteResponse>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.quote(params).await?;
    Ok(Json(response))
}
