//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos en la frontera HTTP. La entrada cruda se
//! convierte aquí a tipos estrictos antes de llegar a la lógica de negocio.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Validar y convertir string a UUID
pub fn parse_uuid(value: &str, field: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value.trim())
        .map_err(|_| AppError::ValidationError(format!("{}: '{}' is not a valid UUID", field, value)))
}

/// Validar y convertir string a fecha (formato YYYY-MM-DD)
pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::ValidationError(format!(
            "{}: '{}' is not a valid date (expected YYYY-MM-DD)",
            field, value
        ))
    })
}

/// Validar que un rango de fechas esté bien ordenado (ambos extremos inclusivos)
pub fn parse_date_range(
    start: &str,
    end: &str,
) -> Result<(NaiveDate, NaiveDate), AppError> {
    let start_date = parse_date(start, "start_date")?;
    let end_date = parse_date(end, "end_date")?;
    if end_date < start_date {
        return Err(AppError::ValidationError(
            "end_date cannot be before start_date".to_string(),
        ));
    }
    Ok((start_date, end_date))
}

/// Validar que un string no esté vacío
pub fn require_not_empty(value: &str, field: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        let d = parse_date("2024-06-03", "start_date").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("03/06/2024", "start_date").is_err());
        assert!(parse_date("2024-13-01", "start_date").is_err());
        assert!(parse_date("", "start_date").is_err());
    }

    #[test]
    fn test_parse_date_range_rejects_inverted() {
        let result = parse_date_range("2024-07-05", "2024-07-01");
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_parse_date_range_single_day() {
        let (s, e) = parse_date_range("2024-07-01", "2024-07-01").unwrap();
        assert_eq!(s, e);
    }

    #[test]
    fn test_parse_uuid_invalid() {
        assert!(parse_uuid("not-a-uuid", "car_id").is_err());
    }

    #[test]
    fn test_require_not_empty() {
        assert!(require_not_empty("   ", "customer_name").is_err());
        assert_eq!(
            require_not_empty("  Ada ", "customer_name").unwrap(),
            "Ada"
        );
    }
}
