pub mod barber_service;

pub use barber_service::BarberService;
