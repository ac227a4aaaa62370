use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {id}")]
    UserNotFound { id: Uuid },

    #[error("username '{username}' is already taken")]
    UsernameTaken { username: String },

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Internal error")]
    Internal,
}

impl DomainError {
    #[must_use]
    pub fn user_not_found(id: Uuid) -> Self {
        Self::UserNotFound { id }
    }

    pub fn username_taken(username: impl Into<String>) -> Self {
        Self::UsernameTaken {
            username: username.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<bloglist_auth::password::HashError> for DomainError {
    fn from(e: bloglist_auth::password::HashError) -> Self {
        tracing::error!(error = %e, "password hashing failed");
        DomainError::Internal
    }
}
