use thiserror::Error;
use tracing::error;

use models::errors::ModelError;

use crate::response::{ApplicationCode, ErrorDetail, RestResponse};

/// Terminal per-request outcomes of the business layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed ({} problem(s))", .0.len())]
    Validation(Vec<ErrorDetail>),
    #[error("conflict: {}", .0.message)]
    Conflict(ErrorDetail),
    #[error("not found: {}", .0.message)]
    NotFound(ErrorDetail),
    #[error("authentication failed: {}", .0.message)]
    Authentication(ErrorDetail),
    /// Store, hashing or signing failure; the message is logged, never sent to clients.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn internal(msg: impl std::fmt::Display) -> Self { Self::Internal(msg.to_string()) }

    pub fn application_code(&self) -> ApplicationCode {
        match self {
            ServiceError::Validation(_) => ApplicationCode::ValidationError,
            ServiceError::Conflict(_) => ApplicationCode::Conflict,
            ServiceError::NotFound(_) => ApplicationCode::NotFound,
            ServiceError::Authentication(_) => ApplicationCode::AuthenticationFailed,
            ServiceError::Internal(_) => ApplicationCode::InternalError,
        }
    }

    /// Build the error envelope; internal causes are replaced by a generic detail.
    pub fn to_envelope(&self) -> RestResponse<()> {
        let details = match self {
            ServiceError::Validation(details) => details.clone(),
            ServiceError::Conflict(d) | ServiceError::NotFound(d) | ServiceError::Authentication(d) => vec![d.clone()],
            ServiceError::Internal(msg) => {
                error!(error = %msg, "internal service error");
                vec![ErrorDetail::internal()]
            }
        };
        RestResponse::error(self.application_code(), details)
    }
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Validation(msg) => ServiceError::Validation(vec![ErrorDetail::new("INVALID_FIELD", msg)]),
            ModelError::Conflict(msg) => ServiceError::Conflict(ErrorDetail::new("DATA_ALREADY_EXISTS", msg)),
            ModelError::MissingReference(msg) => ServiceError::NotFound(ErrorDetail::new("REFERENCE_NOT_FOUND", msg)),
            ModelError::Db(msg) => ServiceError::Internal(msg),
        }
    }
}
