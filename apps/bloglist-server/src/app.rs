use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use bloglist_auth::{AuthorizationGuard, PasswordHasher, TokenService, auth_context_middleware};
use bloglist_blogs::{BlogsService, InMemoryBlogRepository};
use bloglist_http::Problem;
use bloglist_login::LoginService;
use bloglist_users::{InMemoryUserRepository, UsersService};
use secrecy::SecretString;
use tower_http::trace::TraceLayer;

/// Build the complete service router.
///
/// All state is constructed here: the in-memory stores, the token service
/// around the signing secret, and the three module services. The identity
/// resolver runs for every request; route-level policy stays inside the
/// modules.
pub fn build_router(secret: &SecretString) -> Router {
    let tokens = Arc::new(TokenService::new(secret));
    let hasher = PasswordHasher::new();

    let user_repo = Arc::new(InMemoryUserRepository::new());
    let blog_repo = Arc::new(InMemoryBlogRepository::new());

    let users_service = Arc::new(UsersService::new(
        user_repo.clone(),
        blog_repo.clone(),
        hasher.clone(),
    ));
    let blogs_service = Arc::new(BlogsService::new(
        blog_repo,
        user_repo.clone(),
        AuthorizationGuard::new(tokens.clone()),
    ));
    let login_service = Arc::new(LoginService::new(user_repo, tokens, hasher));

    let router = Router::new().route("/healthz", get(health));
    let router = bloglist_users::api::rest::routes::register_routes(router, users_service);
    let router = bloglist_blogs::api::rest::routes::register_routes(router, blogs_service);
    let router = bloglist_login::api::rest::routes::register_routes(router, login_service);

    router
        .fallback(unknown_endpoint)
        .layer(axum::middleware::from_fn(auth_context_middleware))
        .layer(TraceLayer::new_for_http())
}

// Route handlers have to be async even when they never await.
#[allow(clippy::unused_async)]
async fn health() -> StatusCode {
    StatusCode::OK
}

/// Requests to routes nobody registered.
#[allow(clippy::unused_async)]
async fn unknown_endpoint() -> Problem {
    Problem::not_found("unknown endpoint")
}
