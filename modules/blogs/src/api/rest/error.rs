use axum::response::{IntoResponse, Response};
use bloglist_http::Problem;
use http::StatusCode;

use crate::domain::error::DomainError;

/// REST-boundary wrapper so `?` works in handlers.
///
/// A lookup miss is the one case that does not render as a `Problem` body:
/// clients get a bare 404 with an empty body.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            DomainError::BlogNotFound { id } => {
                tracing::debug!(blog_id = %id, "blog not found");
                StatusCode::NOT_FOUND.into_response()
            }

            DomainError::MalformedId => Problem::bad_request("malformed id").into_response(),

            DomainError::Validation { message } => Problem::bad_request(message).into_response(),

            DomainError::Denied(err) => err.into_response(),

            DomainError::Internal => {
                tracing::error!("internal error in blogs module");
                Problem::internal("internal error").into_response()
            }
        }
    }
}
