use axum::extract::Request;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::context::AuthContext;

/// Identity-resolver middleware.
///
/// Pulls the raw bearer token out of the Authorization header and exposes it
/// to downstream handlers as an [`AuthContext`] request extension. It never
/// rejects a request and never verifies the token: a missing or malformed
/// header simply yields an anonymous context, and validity is decided by the
/// guard on the operations that need it.
pub async fn auth_context_middleware(mut request: Request, next: Next) -> Response {
    let ctx = match extract_bearer_token(request.headers()) {
        Some(token) => AuthContext::bearer(token.to_owned()),
        None => AuthContext::anonymous(),
    };

    request.extensions_mut().insert(ctx);
    next.run(request).await
}

/// Extract a bearer token from the Authorization header.
///
/// The `bearer ` scheme prefix is matched case-insensitively; any other
/// scheme, or an empty remainder, counts as no token.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?;

    let (scheme, rest) = value.split_at_checked(7)?;
    if !scheme.eq_ignore_ascii_case("bearer ") {
        return None;
    }

    let token = rest.trim();
    (!token.is_empty()).then_some(token)
}
