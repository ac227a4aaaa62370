use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::BlogsService;

/// Register the blogs routes on the given router.
///
/// Reads are public; create, update and delete enforce ownership inside the
/// service, so no route-level auth layer is needed here.
pub fn register_routes(router: Router, service: Arc<BlogsService>) -> Router {
    router
        .route(
            "/api/blogs",
            get(handlers::list_blogs).post(handlers::create_blog),
        )
        .route(
            "/api/blogs/{id}",
            get(handlers::get_blog)
                .put(handlers::update_blog)
                .delete(handlers::delete_blog),
        )
        .layer(Extension(service))
}
