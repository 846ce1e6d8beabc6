pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::Promotion;
pub use repositories::{MySqlPromotionStore, PromotionStore};
pub use services::PromotionService;
