mod user;

pub use user::{LoginRequest, LoginResponse, User};
