use bloglist_http::Problem;

use crate::domain::error::DomainError;

/// Convert login errors to HTTP Problem responses. The 401 message is part
/// of the client contract: it must contain "invalid".
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidCredentials => Problem::unauthorized(e.to_string()),

            DomainError::Internal => {
                tracing::error!(error = ?e, "internal error in login module");
                Problem::internal("internal error")
            }
        }
    }
}
