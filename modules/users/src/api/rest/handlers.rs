use std::sync::Arc;

use axum::Json;
use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bloglist_http::{ApiJson, ApiResult};
use tracing::info;

use crate::api::rest::dto::{CreateUserReq, UserDto};
use crate::domain::service::{NewUser, UsersService};

/// List all users with their owned blogs populated.
#[tracing::instrument(skip(svc))]
pub async fn list_users(
    Extension(svc): Extension<Arc<UsersService>>,
) -> ApiResult<Json<Vec<UserDto>>> {
    let users = svc.list_populated().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Register a new user.
#[tracing::instrument(skip(svc, req_body), fields(username = %req_body.username))]
pub async fn create_user(
    Extension(svc): Extension<Arc<UsersService>>,
    ApiJson(req_body): ApiJson<CreateUserReq>,
) -> ApiResult<Response> {
    let user = svc
        .register(NewUser {
            username: req_body.username,
            name: req_body.name,
            password: req_body.password,
        })
        .await?;

    info!(user_id = %user.id, "user created");
    Ok((StatusCode::CREATED, Json(UserDto::from(user))).into_response())
}
