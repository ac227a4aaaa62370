use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bloglist_auth::AuthContext;
use bloglist_http::ApiJson;
use tracing::info;
use uuid::Uuid;

use crate::api::rest::dto::{BlogDto, CreateBlogReq, UpdateBlogReq};
use crate::api::rest::error::ApiError;
use crate::domain::error::DomainError;
use crate::domain::service::BlogsService;

/// Path ids arrive as raw strings so that a malformed one becomes a 400
/// rather than axum's default path-rejection response.
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::from(DomainError::MalformedId))
}

/// List all blogs. Public.
#[tracing::instrument(skip(svc))]
pub async fn list_blogs(
    Extension(svc): Extension<Arc<BlogsService>>,
) -> Result<Json<Vec<BlogDto>>, ApiError> {
    let blogs = svc.list().await?;
    Ok(Json(blogs.into_iter().map(Into::into).collect()))
}

/// Fetch one blog. Public.
#[tracing::instrument(skip(svc))]
pub async fn get_blog(
    Extension(svc): Extension<Arc<BlogsService>>,
    Path(id): Path<String>,
) -> Result<Json<BlogDto>, ApiError> {
    let blog = svc.get(parse_id(&id)?).await?;
    Ok(Json(blog.into()))
}

/// Create a blog owned by the authenticated caller.
#[tracing::instrument(skip(svc, ctx, req_body))]
pub async fn create_blog(
    Extension(svc): Extension<Arc<BlogsService>>,
    Extension(ctx): Extension<AuthContext>,
    ApiJson(req_body): ApiJson<CreateBlogReq>,
) -> Result<Response, ApiError> {
    let blog = svc.create(&ctx, req_body.into()).await?;

    info!(blog_id = %blog.id, "blog created");
    Ok((StatusCode::CREATED, Json(BlogDto::from(blog))).into_response())
}

/// Update a blog. Owner only; absent fields keep their stored values.
#[tracing::instrument(skip(svc, ctx, req_body))]
pub async fn update_blog(
    Extension(svc): Extension<Arc<BlogsService>>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<String>,
    ApiJson(req_body): ApiJson<UpdateBlogReq>,
) -> Result<Json<BlogDto>, ApiError> {
    let blog = svc.update(&ctx, parse_id(&id)?, req_body.into()).await?;
    Ok(Json(blog.into()))
}

/// Delete a blog. Owner only.
#[tracing::instrument(skip(svc, ctx))]
pub async fn delete_blog(
    Extension(svc): Extension<Arc<BlogsService>>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    svc.delete(&ctx, parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
