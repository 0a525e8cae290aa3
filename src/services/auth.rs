//! Administrator authentication and session lifecycle.

use crate::domain::{Administrator, MetricsPtr, RepositoryPtr, SessionInfo, SessionStorePtr};
use crate::error::{AppError, AppResult};
use anyhow::anyhow;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

#[derive(Clone)]
pub struct AuthService {
    repository: RepositoryPtr,
    sessions: SessionStorePtr,
    metrics: MetricsPtr,
}

impl AuthService {
    // ---
    pub fn new(repository: RepositoryPtr, sessions: SessionStorePtr, metrics: MetricsPtr) -> Self {
        Self {
            repository,
            sessions,
            metrics,
        }
    }

    /// Check credentials and open a session. Returns the session token.
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<String> {
        // ---
        let admin = self.repository.get_admin_by_username(username).await?;

        let verified = match &admin {
            Some(admin) => verify_password(password, &admin.password_hash)?,
            None => false,
        };
        self.metrics.record_login(verified);

        let Some(admin) = admin.filter(|_| verified) else {
            tracing::warn!("Failed login attempt for user: {}", username);
            return Err(AppError::InvalidCredentials);
        };

        let token = self.sessions.create(&admin).await?;
        tracing::info!("User logged in: {}", admin.username);
        Ok(token)
    }

    /// Destroy a session. Always succeeds for unknown tokens.
    pub async fn logout(&self, token: &str) -> AppResult<()> {
        // ---
        self.sessions.destroy(token).await?;
        Ok(())
    }

    /// Resolve a session token to the identity it was issued for.
    pub async fn authenticate(&self, token: &str) -> AppResult<SessionInfo> {
        // ---
        self.sessions
            .get(token)
            .await?
            .ok_or(AppError::Unauthenticated)
    }

    /// Create the administrator unless one with this username already exists.
    pub async fn ensure_admin(&self, username: &str, password: &str) -> AppResult<Administrator> {
        // ---
        if let Some(existing) = self.repository.get_admin_by_username(username).await? {
            return Ok(existing);
        }

        let hash = hash_password(password)?;
        let admin = self.repository.create_admin(username, &hash).await?;
        tracing::info!("Created administrator: {}", admin.username);
        Ok(admin)
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("Failed to hash password: {e}"))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash string.
pub fn verify_password(password: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| anyhow!("Invalid password hash: {e}"))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
