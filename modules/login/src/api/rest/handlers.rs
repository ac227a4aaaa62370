use std::sync::Arc;

use axum::Json;
use axum::extract::Extension;
use bloglist_http::{ApiJson, ApiResult};

use crate::api::rest::dto::{LoginReq, SessionDto};
use crate::domain::service::LoginService;

/// Exchange username/password for a bearer token.
#[tracing::instrument(skip(svc, req_body), fields(username = %req_body.username))]
pub async fn login(
    Extension(svc): Extension<Arc<LoginService>>,
    ApiJson(req_body): ApiJson<LoginReq>,
) -> ApiResult<Json<SessionDto>> {
    let session = svc.login(req_body.into()).await?;
    Ok(Json(session.into()))
}
