use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest, QuoteParams, QuoteResponse};
use crate::dto::ApiResponse;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::car_repository::CarRepository;
use crate::services::{availability, pricing};
use crate::utils::errors::AppError;
use crate::utils::validation::{parse_date_range, parse_uuid, require_not_empty};

pub struct BookingController {
    cars: CarRepository,
    bookings: BookingRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            cars: CarRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool),
        }
    }

    /// Cotizar un rango sin crear reserva. Solo lectura, sin mutación
    /// del store.
    pub async fn quote(&self, params: QuoteParams) -> Result<QuoteResponse, AppError> {
        let car_id = parse_uuid(&params.car_id, "car_id")?;
        let (start, end) = parse_date_range(&params.start, &params.end)?;

        let car = self
            .cars
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Car with id '{}' not found", car_id)))?;

        let quote = pricing::compute_price(&car, start, end);

        Ok(QuoteResponse {
            car_id,
            start,
            end,
            days: quote.days,
            total: quote.total,
        })
    }

    /// Crear una reserva: validar entrada, buscar coche, comprobar
    /// solapamiento, calcular precio y persistir. Cualquier rechazo es
    /// terminal y no deja escrituras parciales.
    pub async fn submit(
        &self,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let car_id = parse_uuid(&request.car_id, "car_id")?;
        let customer_name = require_not_empty(&request.customer_name, "customer_name")?;
        let customer_email = require_not_empty(&request.customer_email, "customer_email")?;
        let (start, end) = parse_date_range(&request.start_date, &request.end_date)?;

        let car = self
            .cars
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Car with id '{}' not found", car_id)))?;

        // Camino rápido: rechazar sin tomar el bloqueo de fila si el rango
        // ya choca con una reserva visible. La comprobación autoritativa
        // se repite dentro de la transacción de inserción.
        let existing = self.bookings.find_by_car(car.id).await?;
        if availability::find_conflict(&existing, start, end).is_some() {
            return Err(AppError::Conflict(
                "Selected period overlaps an existing booking. Please choose different dates."
                    .to_string(),
            ));
        }

        let booking = self
            .bookings
            .create(car.id, start, end, customer_name, customer_email)
            .await?;

        let quote = pricing::compute_price(&car, booking.start_date, booking.end_date);

        Ok(ApiResponse::success_with_message(
            BookingResponse::new(booking, quote),
            "Booking confirmed".to_string(),
        ))
    }

    /// Datos de confirmación: la reserva con total y días recalculados
    /// del rango almacenado
    pub async fn get_by_id(&self, id: Uuid) -> Result<BookingResponse, AppError> {
        let booking = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking with id '{}' not found", id)))?;

        let car = self
            .cars
            .find_by_id(booking.car_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!("Booking '{}' references a missing car", id))
            })?;

        let quote = pricing::compute_price(&car, booking.start_date, booking.end_date);

        Ok(BookingResponse::new(booking, quote))
    }

    /// Listado de administración: todas las reservas, las más recientes
    /// primero
    pub async fn list_recent(&self) -> Result<Vec<BookingResponse>, AppError> {
        let bookings = self.bookings.find_all_recent().await?;

        let mut responses = Vec::with_capacity(bookings.len());
        for booking in bookings {
            let car = self.cars.find_by_id(booking.car_id).await?.ok_or_else(|| {
                AppError::Internal(format!("Booking '{}' references a missing car", booking.id))
            })?;
            let quote = pricing::compute_price(&car, booking.start_date, booking.end_date);
            responses.push(BookingResponse::new(booking, quote));
        }

        Ok(responses)
    }
}
