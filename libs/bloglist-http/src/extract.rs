use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::problem::Problem;

/// JSON body extractor with the service's error contract.
///
/// Any body that fails to parse or has a structurally wrong shape for the
/// expected fields becomes a 400 "malformed request", instead of axum's
/// default rejection bodies.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Problem;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "request body rejected");
                Err(Problem::bad_request("malformed request"))
            }
        }
    }
}
