pub mod booking_repository;
pub mod car_repository;
