use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::car_dto::{CarResponse, DisabledRangeResponse};
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::car_repository::CarRepository;
use crate::utils::errors::AppError;

pub struct CarController {
    cars: CarRepository,
    bookings: BookingRepository,
}

impl CarController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            cars: CarRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<CarResponse>, AppError> {
        let cars = self.cars.find_all().await?;
        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CarResponse, AppError> {
        let car = self
            .cars
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Car with id '{}' not found", id)))?;

        Ok(CarResponse::from(car))
    }

    /// Rangos ocupados de un coche, uno por reserva existente, ascendente
    /// por fecha de inicio. Solo lectura: dos llamadas sin escrituras
    /// intermedias devuelven lo mismo.
    pub async fn disabled_dates(&self, id: Uuid) -> Result<Vec<DisabledRangeResponse>, AppError> {
        // Verificar que el coche existe antes de listar sus reservas
        self.cars
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Car with id '{}' not found", id)))?;

        let bookings = self.bookings.find_by_car(id).await?;

        Ok(bookings
            .into_iter()
            .map(|b| DisabledRangeResponse {
                from: b.start_date,
                to: b.end_date,
            })
            .collect())
    }
}
