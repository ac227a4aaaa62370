use thiserror::Error;

/// Login failures.
///
/// `InvalidCredentials` covers both an unknown username and a wrong
/// password; the two are never distinguished outside the service's own
/// debug logging.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("Internal error")]
    Internal,
}
