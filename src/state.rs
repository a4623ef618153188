//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Los handles del store viajan aquí de
//! forma explícita en lugar de vivir como estado global.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
