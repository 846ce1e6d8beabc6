pub mod barber_controller;

pub use barber_controller::configure;
