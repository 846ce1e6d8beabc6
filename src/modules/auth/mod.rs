pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{LoginRequest, LoginResponse, User};
pub use repositories::{AuthStore, MySqlAuthStore};
pub use services::AuthService;
