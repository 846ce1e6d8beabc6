use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{Result, Violations};
use crate::middleware::auth::Role;

/// A credentialed account. Only the Argon2 hash of the password is stored.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<()> {
        let mut violations = Violations::new();
        violations.require_not_blank("username", &self.username);
        violations.require_not_blank("password", &self.password);
        violations.into_result()
    }
}

/// Issued to the client on successful login. The raw token travels once;
/// only its digest is persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub role: Role,
    pub expires_at: DateTime<Utc>,
}
