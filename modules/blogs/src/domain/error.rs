use bloglist_auth::AuthError;
use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Blog not found: {id}")]
    BlogNotFound { id: Uuid },

    #[error("malformed id")]
    MalformedId,

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error(transparent)]
    Denied(#[from] AuthError),

    #[error("Internal error")]
    Internal,
}

impl DomainError {
    #[must_use]
    pub fn blog_not_found(id: Uuid) -> Self {
        Self::BlogNotFound { id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<bloglist_users::domain::error::DomainError> for DomainError {
    fn from(e: bloglist_users::domain::error::DomainError) -> Self {
        tracing::error!(error = %e, "owner bookkeeping failed");
        DomainError::Internal
    }
}
