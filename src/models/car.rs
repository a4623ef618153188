//! Modelo de Car
//!
//! Este módulo contiene el struct Car que mapea exactamente a la tabla
//! `cars` del schema PostgreSQL. Los precios son enteros en unidades
//! de moneda (sin decimales): `weekday_price` aplica de lunes a viernes
//! y `weekend_price` a sábado y domingo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Coche alquilable - mapea exactamente a la tabla cars
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub weekday_price: i32,
    pub weekend_price: i32,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
