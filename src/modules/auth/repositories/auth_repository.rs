use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::auth::models::User;

/// Persistence boundary for accounts and sessions.
#[async_trait]
pub trait AuthStore: Send + Sync {
    /// Active account for a username, if any.
    async fn find_active_user(&self, username: &str) -> Result<Option<User>>;

    /// Record a fresh session for a user; only the token digest is stored.
    async fn insert_session(
        &self,
        user_id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<()>;

    /// Revoke the session with the given token digest, if it exists.
    async fn delete_session(&self, token_hash: &str) -> Result<()>;
}

/// MySQL-backed auth store
pub struct MySqlAuthStore {
    pool: MySqlPool,
}

impl MySqlAuthStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthStore for MySqlAuthStore {
    async fn find_active_user(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, role, active
            FROM users
            WHERE username = ? AND active = TRUE
            LIMIT 1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(user)
    }

    async fn insert_session(
        &self,
        user_id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (user_id, token_hash, expires_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(token_hash)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(())
    }

    async fn delete_session(&self, token_hash: &str) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE token_hash = ?")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(())
    }
}
