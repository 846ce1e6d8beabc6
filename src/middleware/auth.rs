use crate::core::AppError;
use actix_web::{
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sqlx::MySqlPool;
use std::future::{ready, Ready};
use std::rc::Rc;

/// Closed set of caller roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR(20)", rename_all = "UPPERCASE")]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "BARBER")]
    Barber,
    #[serde(rename = "CLIENT")]
    Client,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::Barber => write!(f, "BARBER"),
            Role::Client => write!(f, "CLIENT"),
        }
    }
}

/// Principal resolved by the session guard, available to handlers via the
/// `FromRequest` extractor.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    /// Restrict a handler to one role. Callers outside it are rejected.
    pub fn require_role(&self, role: Role) -> crate::core::Result<()> {
        if self.role == role {
            Ok(())
        } else {
            Err(AppError::unauthorized(format!(
                "Requires {} role",
                role
            )))
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<std::result::Result<Self, Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthenticatedUser>()
                .cloned()
                .ok_or_else(|| Error::from(AppError::unauthorized("Not authenticated"))),
        )
    }
}

/// Session token authentication middleware
pub struct SessionAuth {
    pool: MySqlPool,
}

impl SessionAuth {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
            pool: self.pool.clone(),
        }))
    }
}

pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
    pool: MySqlPool,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let pool = self.pool.clone();

        Box::pin(async move {
            // Skip authentication for liveness and login endpoints
            let path = req.path();
            if path == "/health" || path == "/" || path == "/api/auth/login" {
                return svc.call(req).await;
            }

            // Extract session token from X-Auth-Token header
            let token = req
                .headers()
                .get("X-Auth-Token")
                .and_then(|h| h.to_str().ok())
                .ok_or_else(|| Error::from(AppError::unauthorized("Missing X-Auth-Token header")))?;

            // Resolve token against active sessions
            let user = resolve_session(&pool, token).await.map_err(Error::from)?;

            // Store principal in request extensions for the handlers
            req.extensions_mut().insert(user);

            // Continue to the next middleware/handler
            svc.call(req).await
        })
    }
}

/// Look up the user owning a still-valid session for the given token.
async fn resolve_session(pool: &MySqlPool, token: &str) -> crate::core::Result<AuthenticatedUser> {
    let digest = token_digest(token);

    let user = sqlx::query_as::<_, AuthenticatedUser>(
        r#"
        SELECT u.id, u.username, u.role
        FROM sessions s
        INNER JOIN users u ON u.id = s.user_id
        WHERE s.token_hash = ? AND s.expires_at > NOW()
        LIMIT 1
        "#,
    )
    .bind(digest)
    .fetch_optional(pool)
    .await
    .map_err(AppError::Database)?
    .ok_or_else(|| AppError::unauthorized("Invalid or expired session token"))?;

    Ok(user)
}

/// Hex SHA-256 digest of a session token. Only digests are persisted.
pub fn token_digest(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Hash a password for storage using Argon2
pub fn hash_password(password: &str) -> crate::core::Result<String> {
    use argon2::{
        password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
        Argon2,
    };

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))
}

/// Verify a password against a stored Argon2 hash
pub fn verify_password(password: &str, hash: &str) -> crate::core::Result<bool> {
    use argon2::{Argon2, PasswordHash, PasswordVerifier};

    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;

    let argon2 = Argon2::default();

    Ok(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
