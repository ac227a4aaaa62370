use std::sync::Arc;

use bloglist_auth::{PasswordHasher, TokenService};
use bloglist_users::UserRepository;

use super::error::DomainError;

/// Username/password pair as presented by the client.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// A successful login: the issued token plus the display fields clients
/// show for the signed-in user.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub name: Option<String>,
}

pub struct LoginService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
    hasher: PasswordHasher,
}

impl LoginService {
    #[must_use]
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<TokenService>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            users,
            tokens,
            hasher,
        }
    }

    /// Verify credentials and mint a token.
    ///
    /// # Errors
    /// `InvalidCredentials` for an unknown username or a wrong password,
    /// never saying which.
    pub async fn login(&self, credentials: Credentials) -> Result<Session, DomainError> {
        let user = self
            .users
            .find_by_username(&credentials.username)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "credential lookup failed");
                DomainError::Internal
            })?;

        let Some(user) = user else {
            tracing::debug!(username = %credentials.username, "login for unknown username");
            return Err(DomainError::InvalidCredentials);
        };

        if !self.hasher.verify(&credentials.password, &user.password_hash) {
            tracing::debug!(username = %user.username, "login with wrong password");
            return Err(DomainError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id).map_err(|e| {
            tracing::error!(error = %e, "token issuance failed");
            DomainError::Internal
        })?;

        tracing::info!(user_id = %user.id, username = %user.username, "login succeeded");
        Ok(Session {
            token,
            username: user.username,
            name: user.name,
        })
    }
}
