//! Authentication service - Checks credentials.
//!
//! No token or session is issued; a successful login returns the
//! account so the client can keep it.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::domain::user::LoginRequest;
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Real hash verified for unknown emails, so a miss costs as much as a hit.
static DUMMY_HASH: Lazy<String> = Lazy::new(|| {
    Password::new("timing-equalizer-password")
        .map(Password::into_string)
        .unwrap_or_default()
});

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check email and password; 401 for any mismatch
    async fn login(&self, request: LoginRequest) -> AppResult<User>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn login(&self, request: LoginRequest) -> AppResult<User> {
        let (email, password) = match (request.email, request.password) {
            (Some(email), Some(password)) => (email, password),
            _ => return Err(AppError::validation("Email dan password harus diisi.")),
        };

        let user = self.uow.users().find_by_email(&email).await?;

        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.clone()),
            None => Password::from_hash(DUMMY_HASH.clone()),
        };
        let password_valid = stored.verify(&password);

        match user {
            Some(user) if password_valid => {
                tracing::info!(user_id = %user.id, "login succeeded");
                Ok(user)
            }
            _ => {
                tracing::debug!("login rejected");
                Err(AppError::InvalidCredentials)
            }
        }
    }
}
