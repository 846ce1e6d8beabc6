pub mod appointments;
pub mod auth;
pub mod barbers;
pub mod health;
pub mod promotions;
