//! Request extractors that answer with error envelopes instead of axum's plain-text rejections.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use service::errors::ServiceError;
use service::response::ErrorDetail;
use service::validation::validate_request;

use crate::errors::ApiError;

fn malformed(message: String) -> ApiError {
    ApiError(ServiceError::Validation(vec![ErrorDetail::new("INVALID_REQUEST", message)]))
}

/// JSON body that is deserialized and then checked with its `validator` rules.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rej| malformed(rej.body_text()))?;
        validate_request(&value)?;
        Ok(Self(value))
    }
}

/// Query string whose parse failures become validation envelopes.
pub struct EnvelopeQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for EnvelopeQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rej| malformed(rej.body_text()))?;
        Ok(Self(value))
    }
}
