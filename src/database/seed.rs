//! Datos de arranque
//!
//! Si la tabla `cars` está vacía se insertan los coches de demostración
//! con la tarifa por defecto (100 entre semana, 200 fin de semana).
//! Idempotente: en arranques posteriores no hace nada.

use sqlx::PgPool;
use tracing::info;

use crate::repositories::car_repository::CarRepository;
use crate::utils::errors::AppError;

pub async fn seed_cars(pool: &PgPool) -> Result<(), AppError> {
    let cars = CarRepository::new(pool.clone());

    if cars.count().await? > 0 {
        return Ok(());
    }

    let seed: [(&str, &str, &str); 4] = [
        (
            "Tesla Model 3 Performance",
            "Red",
            "https://media.autoexpress.co.uk/image/private/s--X-WVjvBW--/f_auto,t_content-image-full-desktop@1/v1562246899/autoexpress/2018/09/model-3-performance-red-front-motion-sf-skyline.jpg",
        ),
        (
            "Tesla Model 3 Performance",
            "White",
            "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?q=80&w=1600&auto=format&fit=crop",
        ),
        (
            "Tesla Model 3 Performance",
            "Blue",
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?q=80&w=1600&auto=format&fit=crop",
        ),
        (
            "Tesla Model 3 Performance",
            "Red",
            "https://media.autoexpress.co.uk/image/private/s--X-WVjvBW--/f_auto,t_content-image-full-desktop@1/v1562246899/autoexpress/2018/09/model-3-performance-red-front-motion-sf-skyline.jpg",
        ),
    ];

    for (name, color, image_url) in seed {
        cars.create(
            name.to_string(),
            color.to_string(),
            100,
            200,
            Some(image_url.to_string()),
        )
        .await?;
    }

    info!("🌱 Seed completado: {} coches insertados", seed.len());
    Ok(())
}
