use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;

/// RFC 9457-style problem details response.
///
/// Domain errors are converted into a `Problem` exactly once, at the REST
/// boundary, so handlers can use `?` and still produce stable client-visible
/// outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct Problem {
    #[serde(skip)]
    status: StatusCode,
    title: String,
    #[serde(rename = "status")]
    status_code: u16,
    /// Human-readable message. Clients match on this (e.g. login failures
    /// must contain "invalid"), so keep it stable.
    #[serde(rename = "message")]
    detail: String,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            status_code: status.as_u16(),
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", detail)
    }

    #[must_use]
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", detail)
    }

    #[must_use]
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", detail)
    }

    #[must_use]
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", detail)
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn serializes_status_and_message() {
        let problem = Problem::unauthorized("invalid token");
        let json = serde_json::to_value(&problem).unwrap();

        assert_eq!(json["status"], 401);
        assert_eq!(json["message"], "invalid token");
        assert_eq!(json["title"], "Unauthorized");
    }

    #[test]
    fn into_response_keeps_status() {
        let response = Problem::bad_request("malformed id").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
