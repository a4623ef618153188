//! Módulo de base de datos
//!
//! Maneja la conexión, migraciones y seed de PostgreSQL

pub mod connection;
pub mod seed;

pub use connection::DatabaseConnection;
