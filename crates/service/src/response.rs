//! Uniform response envelope shared by every endpoint.
//!
//! Success and error responses carry the same `responseStatus` block; payloads
//! and error details are omitted from JSON when absent instead of being `null`.

use serde::{Deserialize, Serialize};

/// Stable application outcome codes surfaced in `responseStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationCode {
    Success,
    ValidationError,
    AuthenticationFailed,
    NotFound,
    Conflict,
    InternalError,
}

impl ApplicationCode {
    pub fn code(&self) -> &'static str {
        match self {
            ApplicationCode::Success => "00",
            ApplicationCode::ValidationError => "40",
            ApplicationCode::AuthenticationFailed => "41",
            ApplicationCode::NotFound => "44",
            ApplicationCode::Conflict => "49",
            ApplicationCode::InternalError => "50",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApplicationCode::Success => "Success",
            ApplicationCode::ValidationError => "Validation error",
            ApplicationCode::AuthenticationFailed => "Authentication failed",
            ApplicationCode::NotFound => "Data not found",
            ApplicationCode::Conflict => "Data already exists",
            ApplicationCode::InternalError => "Internal server error",
        }
    }

    /// HTTP status the web layer should answer with.
    pub fn http_status(&self) -> u16 {
        match self {
            ApplicationCode::Success => 200,
            ApplicationCode::ValidationError => 400,
            ApplicationCode::AuthenticationFailed => 401,
            ApplicationCode::NotFound => 404,
            ApplicationCode::Conflict => 409,
            ApplicationCode::InternalError => 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseStatus {
    pub response_code: String,
    pub response_message: String,
}

impl From<ApplicationCode> for ResponseStatus {
    fn from(code: ApplicationCode) -> Self {
        Self { response_code: code.code().to_string(), response_message: code.message().to_string() }
    }
}

/// One field-level (or request-level when `field` is absent) problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: String,
    pub message: String,
}

impl ErrorDetail {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self { field: None, code: code.to_string(), message: message.into() }
    }

    pub fn for_field(field: impl Into<String>, code: &str, message: impl Into<String>) -> Self {
        Self { field: Some(field.into()), code: code.to_string(), message: message.into() }
    }

    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::for_field(field, "INVALID_FIELD", message)
    }

    pub fn user_already_exists() -> Self {
        Self::new("USER_ALREADY_EXISTS", "User with the same username or email already exists")
    }

    pub fn user_invalid_role() -> Self {
        Self::for_field("role", "USER_INVALID_ROLE", "Role does not exist")
    }

    pub fn user_not_found() -> Self {
        Self::new("USER_NOT_FOUND", "User not found")
    }

    /// Deliberately generic: never says which part of the credentials was wrong.
    pub fn authentication_failed() -> Self {
        Self::new("AUTHENTICATION_FAILED", "Invalid username/email or password")
    }

    pub fn invalid_token() -> Self {
        Self::new("INVALID_TOKEN", "Missing, invalid or expired access token")
    }

    pub fn item_not_found() -> Self {
        Self::new("ITEM_NOT_FOUND", "Item not found")
    }

    pub fn item_already_exists() -> Self {
        Self::for_field("barcode", "ITEM_ALREADY_EXISTS", "Item with the same barcode already exists")
    }

    pub fn category_not_found(name: &str) -> Self {
        Self::for_field("categories", "CATEGORY_NOT_FOUND", format!("Category '{name}' does not exist"))
    }

    pub fn category_already_exists() -> Self {
        Self::for_field("name", "CATEGORY_ALREADY_EXISTS", "Category already exists")
    }

    pub fn internal() -> Self {
        Self::new("INTERNAL_ERROR", "Unexpected error, please try again later")
    }
}

/// Envelope for single-object (or empty) responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestResponse<T> {
    pub response_status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub error_details: Vec<ErrorDetail>,
}

impl<T> RestResponse<T> {
    /// Success without payload.
    pub fn success() -> Self {
        Self { response_status: ApplicationCode::Success.into(), data: None, error_details: Vec::new() }
    }

    pub fn success_with(data: T) -> Self {
        Self { response_status: ApplicationCode::Success.into(), data: Some(data), error_details: Vec::new() }
    }

    pub fn error(code: ApplicationCode, error_details: Vec<ErrorDetail>) -> Self {
        Self { response_status: code.into(), data: None, error_details }
    }
}

/// Paging block of a [`PaginatedResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingMetadata {
    /// 1-based page number.
    pub page: u64,
    pub row_per_page: u64,
    pub total_data: u64,
}

impl PagingMetadata {
    /// `page_index` is the store's 0-based index; it is reported 1-based.
    pub fn new(page_index: u64, size: u64, total: u64) -> Self {
        Self { page: page_index.saturating_add(1), row_per_page: size, total_data: total }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub response_status: ResponseStatus,
    pub data: Vec<T>,
    pub detail_pages: PagingMetadata,
}

impl<T> PaginatedResponse<T> {
    pub fn from_page(data: Vec<T>, page_index: u64, size: u64, total: u64) -> Self {
        Self {
            response_status: ApplicationCode::Success.into(),
            data,
            detail_pages: PagingMetadata::new(page_index, size, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_success_omits_data_and_errors() {
        let body = serde_json::to_value(RestResponse::<()>::success()).unwrap();
        assert_eq!(body, json!({"responseStatus": {"responseCode": "00", "responseMessage": "Success"}}));
    }

    #[test]
    fn success_with_payload_is_camel_case() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Token { access_token: String }

        let body = serde_json::to_value(RestResponse::success_with(Token { access_token: "t".into() })).unwrap();
        assert_eq!(body["data"]["accessToken"], "t");
        assert!(body.get("errorDetails").is_none());
    }

    #[test]
    fn error_envelope_keeps_detail_order() {
        let details = vec![
            ErrorDetail::invalid_field("email", "must be an email"),
            ErrorDetail::invalid_field("password", "must not be empty"),
        ];
        let body = serde_json::to_value(RestResponse::<()>::error(ApplicationCode::ValidationError, details)).unwrap();
        assert_eq!(body["responseStatus"]["responseCode"], "40");
        assert!(body.get("data").is_none());
        assert_eq!(body["errorDetails"][0]["field"], "email");
        assert_eq!(body["errorDetails"][1]["field"], "password");
    }

    #[test]
    fn request_level_detail_has_no_field_key() {
        let body = serde_json::to_value(ErrorDetail::user_not_found()).unwrap();
        assert!(body.get("field").is_none());
        assert_eq!(body["code"], "USER_NOT_FOUND");
    }

    #[test]
    fn paging_metadata_is_one_based_and_echoes_size() {
        for (idx, size, total) in [(0u64, 10u64, 0u64), (3, 25, 7), (9, 1, 1000)] {
            let page = PaginatedResponse::<u8>::from_page(Vec::new(), idx, size, total);
            assert_eq!(page.detail_pages, PagingMetadata { page: idx + 1, row_per_page: size, total_data: total });
        }
        let body = serde_json::to_value(PaginatedResponse::from_page(vec![1, 2], 0, 2, 5)).unwrap();
        assert_eq!(body["detailPages"], json!({"page": 1, "rowPerPage": 2, "totalData": 5}));
    }

    #[test]
    fn status_codes_map_to_http() {
        assert_eq!(ApplicationCode::Conflict.http_status(), 409);
        assert_eq!(ApplicationCode::AuthenticationFailed.http_status(), 401);
        assert_eq!(ResponseStatus::from(ApplicationCode::NotFound).response_code, "44");
    }
}
