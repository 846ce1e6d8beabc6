pub mod barber_repository;

pub use barber_repository::{BarberStore, MySqlBarberStore};
