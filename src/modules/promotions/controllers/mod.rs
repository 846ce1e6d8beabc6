pub mod promotion_controller;

pub use promotion_controller::configure;
