use bloglist_http::Problem;

use crate::domain::error::DomainError;

/// Convert domain errors to HTTP Problem responses
pub fn domain_error_to_problem(e: &DomainError) -> Problem {
    match e {
        DomainError::Validation { message } => Problem::bad_request(message.clone()),

        DomainError::UsernameTaken { username } => {
            Problem::bad_request(format!("username '{username}' is already taken"))
        }

        DomainError::UserNotFound { id } => Problem::not_found(format!("user {id} not found")),

        DomainError::Internal => {
            tracing::error!(error = ?e, "internal error in users module");
            Problem::internal("internal error")
        }
    }
}

/// Implement Into<Problem> for `DomainError` so `?` works in handlers
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e)
    }
}
