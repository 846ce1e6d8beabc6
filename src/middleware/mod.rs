pub mod auth;
pub mod request_id;

pub use auth::{
    hash_password, token_digest, verify_password, AuthenticatedUser, Role, SessionAuth,
};
pub use request_id::RequestId;
