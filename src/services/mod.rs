//! Servicios del sistema
//!
//! Este módulo contiene el motor de reservas: cálculo de precios
//! por día y comprobación de solapamiento de rangos.

pub mod availability;
pub mod pricing;
