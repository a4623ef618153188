use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::booking::Booking;
use crate::utils::errors::AppError;

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear una reserva. La comprobación de solapamiento y la inserción
    /// corren dentro de una única transacción que primero bloquea la fila
    /// del coche (FOR UPDATE): dos peticiones concurrentes para el mismo
    /// coche se serializan y no pueden insertar rangos en conflicto.
    pub async fn create(
        &self,
        car_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        customer_name: String,
        customer_email: String,
    ) -> Result<Booking, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        // Bloqueo por coche: serializa los intentos de reserva concurrentes
        let locked: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM cars WHERE id = $1 FOR UPDATE")
                .bind(car_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error locking car: {}", e)))?;

        if locked.is_none() {
            return Err(AppError::NotFound(format!(
                "Car with id '{}' not found",
                car_id
            )));
        }

        // Test estándar de solapamiento de intervalos cerrados:
        // [a, b] y [c, d] se solapan sii a <= d && c <= b
        let (conflict,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM bookings
                WHERE car_id = $1 AND start_date <= $3 AND end_date >= $2
            )
            "#,
        )
        .bind(car_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking overlap: {}", e)))?;

        if conflict {
            return Err(AppError::Conflict(
                "Selected period overlaps an existing booking. Please choose different dates."
                    .to_string(),
            ));
        }

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (id, car_id, start_date, end_date, customer_name, customer_email, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(car_id)
        .bind(start_date)
        .bind(end_date)
        .bind(customer_name)
        .bind(customer_email)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating booking: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing booking: {}", e)))?;

        Ok(booking)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding booking: {}", e)))?;

        Ok(booking)
    }

    /// Reservas de un coche en orden ascendente por fecha de inicio
    pub async fn find_by_car(&self, car_id: Uuid) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE car_id = $1 ORDER BY start_date ASC",
        )
        .bind(car_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing bookings: {}", e)))?;

        Ok(bookings)
    }

    /// Todas las reservas, las más recientes primero
    pub async fn find_all_recent(&self) -> Result<Vec<Booking>, AppError> {
        let bookings =
            sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error listing bookings: {}", e)))?;

        Ok(bookings)
    }
}
