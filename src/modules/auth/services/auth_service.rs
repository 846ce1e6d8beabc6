use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::middleware::auth::{token_digest, verify_password};
use crate::modules::auth::models::{LoginRequest, LoginResponse};
use crate::modules::auth::repositories::AuthStore;

/// Issues and revokes session tokens.
pub struct AuthService {
    store: Arc<dyn AuthStore>,
    session_ttl: Duration,
}

impl AuthService {
    pub fn new(store: Arc<dyn AuthStore>, session_ttl_hours: u32) -> Self {
        Self {
            store,
            session_ttl: Duration::hours(i64::from(session_ttl_hours)),
        }
    }

    /// Verify credentials and issue a fresh session token. Unknown users and
    /// wrong passwords are indistinguishable to the caller.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        request.validate()?;

        let user = self
            .store
            .find_active_user(&request.username)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let token = Uuid::new_v4().to_string();
        let expires_at = Utc::now() + self.session_ttl;

        self.store
            .insert_session(user.id, &token_digest(&token), expires_at)
            .await?;

        tracing::info!(username = %user.username, "Session issued");

        Ok(LoginResponse {
            token,
            username: user.username,
            role: user.role,
            expires_at,
        })
    }

    /// Revoke the session bound to the given raw token. Revoking an unknown
    /// token is a no-op.
    pub async fn logout(&self, token: &str) -> Result<()> {
        self.store.delete_session(&token_digest(token)).await
    }
}
