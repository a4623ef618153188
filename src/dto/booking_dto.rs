use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::booking::Booking;
use crate::services::pricing::PriceQuote;

/// Request para crear una reserva. Las fechas y el car_id llegan como
/// strings y se convierten a tipos estrictos en el controlador; la
/// lógica de negocio nunca ve datos sin validar.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub car_id: String,

    #[validate(length(min = 1, max = 120))]
    pub customer_name: String,

    // Solo presencia: el formato del email no se valida
    #[validate(length(min = 1, max = 120))]
    pub customer_email: String,

    pub start_date: String,
    pub end_date: String,
}

/// Parámetros de query para cotizar un rango sin crear reserva
#[derive(Debug, Deserialize)]
pub struct QuoteParams {
    pub car_id: String,
    pub start: String,
    pub end: String,
}

// Response de cotización
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub car_id: Uuid,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: i64,
    pub total: i64,
}

// Response de reserva; total y days se recalculan del rango almacenado
// para la vista de confirmación
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub car_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub customer_name: String,
    pub customer_email: String,
    pub days: i64,
    pub total: i64,
    pub created_at: DateTime<Utc>,
}

impl BookingResponse {
    pub fn new(booking: Booking, quote: PriceQuote) -> Self {
        Self {
            id: booking.id,
            car_id: booking.car_id,
            start_date: booking.start_date,
            end_date: booking.end_date,
            customer_name: booking.customer_name,
            customer_email: booking.customer_email,
            days: quote.days,
            total: quote.total,
            created_at: booking.created_at,
        }
    }
}
