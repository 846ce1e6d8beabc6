// Service appointment workflow: status lifecycle, filtered retrieval and
// DTO projection over a single appointment table.

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{AppointmentStatus, ServiceAppointment, ServiceAppointmentDto};
pub use repositories::{AppointmentStore, MySqlAppointmentStore};
pub use services::AppointmentService;
