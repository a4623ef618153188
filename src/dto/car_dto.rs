use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::car::Car;

// Response de coche para la API
#[derive(Debug, Serialize)]
pub struct CarResponse {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub weekday_price: i32,
    pub weekend_price: i32,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            name: car.name,
            color: car.color,
            weekday_price: car.weekday_price,
            weekend_price: car.weekend_price,
            image_url: car.image_url,
            created_at: car.created_at,
        }
    }
}

// Rango de fechas ocupado por una reserva existente (ambos extremos inclusivos)
#[derive(Debug, Serialize)]
pub struct DisabledRangeResponse {
    pub from: NaiveDate,
    pub to: NaiveDate,
}
