use std::sync::Arc;

use axum::routing::post;
use axum::{Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::LoginService;

/// Register the login route on the given router.
pub fn register_routes(router: Router, service: Arc<LoginService>) -> Router {
    router
        .route("/api/login", post(handlers::login))
        .layer(Extension(service))
}
