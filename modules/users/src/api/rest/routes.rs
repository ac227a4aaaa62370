use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::UsersService;

/// Register the users routes on the given router.
///
/// Both operations are public: registration is open, and listing does not
/// expose credential material.
pub fn register_routes(router: Router, service: Arc<UsersService>) -> Router {
    router
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .layer(Extension(service))
}
