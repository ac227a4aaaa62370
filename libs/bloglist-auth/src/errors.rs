use axum::response::{IntoResponse, Response};
use bloglist_http::Problem;
use thiserror::Error;

/// Failures raised by the access-control core.
///
/// `InvalidToken` covers every token problem (absent, malformed, bad
/// signature); `Unauthorized` means the token verified but the caller does
/// not own the target resource. The distinction exists for logging only:
/// both surface to clients as the same generic 401 so a caller cannot probe
/// which check failed.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid token")]
    InvalidToken,

    #[error("caller does not own the resource")]
    Unauthorized,

    #[error("token encoding failed: {0}")]
    Encoding(#[source] jsonwebtoken::errors::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            AuthError::InvalidToken | AuthError::Unauthorized => {
                tracing::debug!(reason = %self, "mutation denied");
                Problem::unauthorized("invalid token").into_response()
            }
            AuthError::Encoding(err) => {
                tracing::error!(error = %err, "token encoding failed");
                Problem::internal("internal error").into_response()
            }
        }
    }
}
