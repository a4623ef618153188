//! Motor de precios
//!
//! Calcula el precio total de un alquiler recorriendo cada día del rango
//! inclusivo y aplicando la tarifa de entre semana o de fin de semana.
//! Todo el cálculo es aritmética entera, determinista y sin estado.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::car::Car;

/// Resultado de una cotización: días ocupados y precio total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub days: i64,
    pub total: i64,
}

/// Iterador sobre cada fecha de `[start, end]` inclusive, en orden ascendente.
/// Requiere `start <= end`; los llamantes validan el rango antes.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

/// Clasificación fija de fin de semana: sábado y domingo
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Calcular el precio total y el número de días de un rango inclusivo.
/// Función pura de `(weekday_price, weekend_price, start, end)`.
pub fn compute_price(car: &Car, start: NaiveDate, end: NaiveDate) -> PriceQuote {
    let mut total: i64 = 0;
    let mut days: i64 = 0;
    for d in date_range(start, end) {
        days += 1;
        if is_weekend(d) {
            total += i64::from(car.weekend_price);
        } else {
            total += i64::from(car.weekday_price);
        }
    }
    PriceQuote { days, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn test_car(weekday_price: i32, weekend_price: i32) -> Car {
        Car {
            id: Uuid::new_v4(),
            name: "Tesla Model 3 Performance".to_string(),
            color: "Red".to_string(),
            weekday_price,
            weekend_price,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_weekend_fixed_days() {
        // 2024-06-03 es lunes
        assert!(!is_weekend(date(2024, 6, 3)));
        assert!(!is_weekend(date(2024, 6, 4)));
        assert!(!is_weekend(date(2024, 6, 5)));
        assert!(!is_weekend(date(2024, 6, 6)));
        assert!(!is_weekend(date(2024, 6, 7)));
        assert!(is_weekend(date(2024, 6, 8)));
        assert!(is_weekend(date(2024, 6, 9)));
    }

    #[test]
    fn test_is_weekend_is_stable() {
        let d = date(2024, 6, 8);
        assert_eq!(is_weekend(d), is_weekend(d));
    }

    #[test]
    fn test_date_range_inclusive_both_ends() {
        let dates: Vec<NaiveDate> = date_range(date(2024, 1, 30), date(2024, 2, 2)).collect();
        assert_eq!(
            dates,
            vec![
                date(2024, 1, 30),
                date(2024, 1, 31),
                date(2024, 2, 1),
                date(2024, 2, 2),
            ]
        );
    }

    #[test]
    fn test_date_range_single_day() {
        let dates: Vec<NaiveDate> = date_range(date(2024, 7, 1), date(2024, 7, 1)).collect();
        assert_eq!(dates, vec![date(2024, 7, 1)]);
    }

    #[test]
    fn test_compute_price_full_week() {
        // Lunes 2024-06-03 a domingo 2024-06-09: 5 días de semana + 2 de finde
        let car = test_car(100, 200);
        let quote = compute_price(&car, date(2024, 6, 3), date(2024, 6, 9));
        assert_eq!(quote.days, 7);
        assert_eq!(quote.total, 5 * 100 + 2 * 200);
    }

    #[test]
    fn test_compute_price_single_weekday() {
        let car = test_car(100, 200);
        let quote = compute_price(&car, date(2024, 6, 3), date(2024, 6, 3));
        assert_eq!(quote.days, 1);
        assert_eq!(quote.total, 100);
    }

    #[test]
    fn test_compute_price_single_weekend_day() {
        let car = test_car(100, 200);
        let quote = compute_price(&car, date(2024, 6, 8), date(2024, 6, 8));
        assert_eq!(quote.days, 1);
        assert_eq!(quote.total, 200);
    }

    #[test]
    fn test_compute_price_days_match_span() {
        let car = test_car(100, 200);
        let start = date(2024, 2, 26);
        let end = date(2024, 3, 10);
        let quote = compute_price(&car, start, end);
        assert_eq!(quote.days, (end - start).num_days() + 1);
    }

    #[test]
    fn test_compute_price_zero_rate_allowed() {
        // Tarifa cero permitida: día gratuito
        let car = test_car(0, 0);
        let quote = compute_price(&car, date(2024, 6, 3), date(2024, 6, 9));
        assert_eq!(quote.days, 7);
        assert_eq!(quote.total, 0);
    }

    #[test]
    fn test_compute_price_is_deterministic() {
        let car = test_car(75, 130);
        let a = compute_price(&car, date(2025, 1, 1), date(2025, 1, 31));
        let b = compute_price(&car, date(2025, 1, 1), date(2025, 1, 31));
        assert_eq!(a, b);
    }
}
