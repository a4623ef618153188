//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y
//! validación de entrada.

pub mod errors;
pub mod extractors;
pub mod validation;
