//! Modelo de Booking
//!
//! Este módulo contiene el struct Booking que mapea a la tabla `bookings`.
//! `start_date` y `end_date` son ambos inclusivos; el schema garantiza
//! `start_date <= end_date` y la referencia a un coche existente.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Reserva confirmada - mapea exactamente a la tabla bookings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub car_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub customer_name: String,
    pub customer_email: String,
    pub created_at: DateTime<Utc>,
}
