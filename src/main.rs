mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Car Rental Booking API");
    info!("=========================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Migraciones idempotentes + seed de coches
    database::connection::run_migrations(&pool).await?;
    database::seed::seed_cars(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Error en seed: {}", e))?;

    // Crear router de la API
    let config = EnvironmentConfig::from_env();
    let port = config.port;
    let app_state = AppState::new(pool, config);
    let app = routes::create_router(app_state);

    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚙 Endpoints - Cars:");
    info!("   GET  /api/cars - Listar coches");
    info!("   GET  /api/cars/:id - Obtener coche");
    info!("   GET  /api/cars/:id/disabled-dates - Rangos ya reservados");
    info!("📅 Endpoints - Bookings:");
    info!("   GET  /api/quote - Cotizar rango de fechas");
    info!("   POST /api/bookings - Crear reserva");
    info!("   GET  /api/bookings/:id - Confirmación de reserva");
    info!("   GET  /api/bookings - Listado admin (recientes primero)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
