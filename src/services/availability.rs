//! Comprobación de disponibilidad
//!
//! Predicado de solapamiento entre rangos de fechas inclusivos. Dos
//! intervalos cerrados `[a, b]` y `[c, d]` se solapan si y solo si
//! `a <= d && c <= b`: compartir un único día de frontera cuenta como
//! conflicto, rangos adyacentes no.
//!
//! Este predicado es el camino rápido del controlador; la comprobación
//! autoritativa se repite en SQL dentro de la transacción de inserción
//! (ver `BookingRepository::create`).

use chrono::NaiveDate;

use crate::models::booking::Booking;

/// Solapamiento de intervalos cerrados
pub fn ranges_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start <= b_end && b_start <= a_end
}

/// Buscar la primera reserva existente que entre en conflicto con el
/// rango candidato
pub fn find_conflict(
    bookings: &[Booking],
    start: NaiveDate,
    end: NaiveDate,
) -> Option<&Booking> {
    bookings
        .iter()
        .find(|b| ranges_overlap(b.start_date, b.end_date, start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(start: NaiveDate, end: NaiveDate) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            car_id: Uuid::new_v4(),
            start_date: start,
            end_date: end,
            customer_name: "Test".to_string(),
            customer_email: "test@example.com".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_shared_boundary_day_overlaps() {
        // [2024-01-01, 2024-01-05] y [2024-01-05, 2024-01-10] comparten el día 05
        assert!(ranges_overlap(
            date(2024, 1, 1),
            date(2024, 1, 5),
            date(2024, 1, 5),
            date(2024, 1, 10),
        ));
    }

    #[test]
    fn test_adjacent_ranges_do_not_overlap() {
        assert!(!ranges_overlap(
            date(2024, 1, 1),
            date(2024, 1, 4),
            date(2024, 1, 5),
            date(2024, 1, 10),
        ));
    }

    #[test]
    fn test_containment_overlaps_symmetrically() {
        let outer = (date(2024, 3, 1), date(2024, 3, 31));
        let inner = (date(2024, 3, 10), date(2024, 3, 12));
        assert!(ranges_overlap(outer.0, outer.1, inner.0, inner.1));
        assert!(ranges_overlap(inner.0, inner.1, outer.0, outer.1));
    }

    #[test]
    fn test_disjoint_ranges() {
        assert!(!ranges_overlap(
            date(2024, 1, 1),
            date(2024, 1, 2),
            date(2024, 2, 1),
            date(2024, 2, 2),
        ));
    }

    #[test]
    fn test_identical_single_day_ranges_overlap() {
        let d = date(2024, 7, 1);
        assert!(ranges_overlap(d, d, d, d));
    }

    #[test]
    fn test_find_conflict_returns_first_match() {
        let bookings = vec![
            booking(date(2024, 7, 1), date(2024, 7, 5)),
            booking(date(2024, 7, 20), date(2024, 7, 25)),
        ];
        let hit = find_conflict(&bookings, date(2024, 7, 4), date(2024, 7, 10));
        assert!(hit.is_some());
        assert_eq!(hit.unwrap().start_date, date(2024, 7, 1));

        assert!(find_conflict(&bookings, date(2024, 7, 6), date(2024, 7, 19)).is_none());
    }
}
