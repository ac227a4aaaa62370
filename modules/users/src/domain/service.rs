use std::sync::Arc;

use bloglist_auth::PasswordHasher;
use uuid::Uuid;

use super::error::DomainError;
use super::model::{BlogSummary, User};
use super::repo::{BlogDirectory, UserRepository};

/// Minimum password length accepted at registration.
const MIN_PASSWORD_LEN: usize = 3;

/// New registration input. Carries the plaintext password only for the
/// duration of the call; what gets stored is always the hash.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub name: Option<String>,
    pub password: String,
}

/// A user together with resolved summaries of the blogs they own.
#[derive(Debug, Clone)]
pub struct PopulatedUser {
    pub user: User,
    pub blogs: Vec<BlogSummary>,
}

pub struct UsersService {
    repo: Arc<dyn UserRepository>,
    blogs: Arc<dyn BlogDirectory>,
    hasher: PasswordHasher,
}

impl UsersService {
    #[must_use]
    pub fn new(
        repo: Arc<dyn UserRepository>,
        blogs: Arc<dyn BlogDirectory>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            repo,
            blogs,
            hasher,
        }
    }

    /// Register a new user.
    ///
    /// # Errors
    /// `Validation` for a missing/short password or empty username,
    /// `UsernameTaken` if the username is already in use.
    pub async fn register(&self, new_user: NewUser) -> Result<User, DomainError> {
        if new_user.password.len() < MIN_PASSWORD_LEN {
            return Err(DomainError::validation(
                "password is shorter than the minimum allowed length",
            ));
        }
        if new_user.username.trim().is_empty() {
            return Err(DomainError::validation("username is required"));
        }

        let password_hash = self.hasher.hash(&new_user.password)?;

        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            name: new_user.name,
            password_hash,
            blogs: Vec::new(),
        };

        let saved = self.repo.insert(user).await?;
        tracing::info!(user_id = %saved.id, username = %saved.username, "user registered");
        Ok(saved)
    }

    /// List all users with their owned-blog summaries populated.
    ///
    /// # Errors
    /// Propagates store failures.
    pub async fn list_populated(&self) -> Result<Vec<PopulatedUser>, DomainError> {
        let users = self.repo.list().await?;

        let mut populated = Vec::with_capacity(users.len());
        for user in users {
            let blogs = self.blogs.summaries_for(&user.blogs).await;
            populated.push(PopulatedUser { user, blogs });
        }

        Ok(populated)
    }
}
