//! Bridge from `validator` derive errors to envelope error details.

use validator::{Validate, ValidationErrors};

use crate::errors::ServiceError;
use crate::response::ErrorDetail;

/// Key `validator` uses for struct-level (schema) errors.
const SCHEMA_KEY: &str = "__all__";

pub fn validate_request<T: Validate>(request: &T) -> Result<(), ServiceError> {
    request.validate().map_err(|errs| ServiceError::Validation(to_error_details(&errs)))
}

/// Flatten field errors into details sorted by field name; schema errors come first.
pub fn to_error_details(errors: &ValidationErrors) -> Vec<ErrorDetail> {
    let mut fields: Vec<(String, Vec<ErrorDetail>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let field = field.to_string();
            let details = errs
                .iter()
                .map(|e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} failed `{}` check", e.code));
                    if field == SCHEMA_KEY {
                        ErrorDetail::new("INVALID_REQUEST", message)
                    } else {
                        ErrorDetail::invalid_field(field.clone(), message)
                    }
                })
                .collect();
            (field, details)
        })
        .collect();
    fields.sort_by(|(a, _), (b, _)| match (a == SCHEMA_KEY, b == SCHEMA_KEY) {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => a.cmp(b),
    });
    fields.into_iter().flat_map(|(_, d)| d).collect()
}
