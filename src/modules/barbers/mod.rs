pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::Barber;
pub use repositories::{BarberStore, MySqlBarberStore};
pub use services::BarberService;
