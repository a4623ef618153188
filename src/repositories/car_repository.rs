use sqlx::PgPool;
use uuid::Uuid;
use chrono::Utc;

use crate::models::car::Car;
use crate::utils::errors::AppError;

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        color: String,
        weekday_price: i32,
        weekend_price: i32,
        image_url: Option<String>,
    ) -> Result<Car, AppError> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (id, name, color, weekday_price, weekend_price, image_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(color)
        .bind(weekday_price)
        .bind(weekend_price)
        .bind(image_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating car: {}", e)))?;

        Ok(car)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding car: {}", e)))?;

        Ok(car)
    }

    pub async fn find_all(&self) -> Result<Vec<Car>, AppError> {
        let cars = sqlx::query_as::<_, Car>("SELECT * FROM cars ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error listing cars: {}", e)))?;

        Ok(cars)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cars")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error counting cars: {}", e)))?;

        Ok(result.0)
    }
}
