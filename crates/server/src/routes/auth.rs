use std::sync::Arc;

use axum::{extract::{Request, State}, http::{header, StatusCode}, middleware::Next, response::Response, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use service::auth::domain::{SignInRequest, SignInResponse, SignUpRequest};
use service::auth::token::TokenIssuer;
use service::auth::AuthService;
use service::category::CategoryService;
use service::errors::ServiceError;
use service::inventory::InventoryService;
use service::response::{ErrorDetail, RestResponse};

use crate::errors::ApiError;
use crate::extract::ValidatedJson;
use crate::metrics;

pub const AUTH_COOKIE: &str = "auth_token";

#[derive(Clone)]
pub struct ServerState {
    pub auth: Arc<AuthService>,
    pub inventory: Arc<InventoryService>,
    pub category: Arc<CategoryService>,
    pub tokens: Arc<dyn TokenIssuer>,
}

#[utoipa::path(post, path = "/auth/signup", tag = "auth", request_body = crate::openapi::SignUpDoc, responses((status = 200, description = "Registered"), (status = 400, description = "Validation error"), (status = 404, description = "Unknown role"), (status = 409, description = "Conflict")))]
pub async fn sign_up(
    State(state): State<ServerState>,
    ValidatedJson(input): ValidatedJson<SignUpRequest>,
) -> Result<Json<RestResponse<()>>, ApiError> {
    let res = state.auth.sign_up(input).await;
    metrics::record(&metrics::SIGN_UP_TOTAL, &res);
    Ok(Json(res?))
}

#[utoipa::path(post, path = "/auth/signin", tag = "auth", request_body = crate::openapi::SignInDoc, responses((status = 200, description = "Signed in"), (status = 401, description = "Unauthorized"), (status = 404, description = "Unknown user")))]
pub async fn sign_in(
    State(state): State<ServerState>,
    jar: CookieJar,
    ValidatedJson(input): ValidatedJson<SignInRequest>,
) -> Result<(CookieJar, Json<RestResponse<SignInResponse>>), ApiError> {
    let res = state.auth.sign_in(input).await;
    metrics::record(&metrics::SIGN_IN_TOTAL, &res);
    let envelope = res?;

    let jar = match envelope.data.as_ref() {
        Some(data) => {
            let mut cookie = Cookie::new(AUTH_COOKIE, data.access_token.clone());
            cookie.set_path("/");
            cookie.set_http_only(true);
            cookie.set_secure(false);
            cookie.set_same_site(SameSite::Lax);
            jar.add(cookie)
        }
        None => jar,
    };
    Ok((jar, Json(envelope)))
}

pub async fn sign_out(jar: CookieJar) -> (CookieJar, StatusCode) {
    let mut cookie = Cookie::from(AUTH_COOKIE);
    cookie.set_path("/");
    (jar.remove(cookie), StatusCode::NO_CONTENT)
}

fn rejected() -> ApiError {
    ApiError(ServiceError::Authentication(ErrorDetail::invalid_token()))
}

/// Guard for protected routes: `Authorization: Bearer <token>`, falling back to the `auth_token` cookie.
/// Verified claims are attached to the request extensions.
pub async fn require_bearer_token_state(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = req.uri().path().to_string();

    let token = match req.headers().get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(h) => match h.strip_prefix("Bearer ") {
            Some(t) => t.trim().to_string(),
            None => {
                tracing::warn!(path = %path, "invalid Authorization format (expect Bearer)");
                return Err(rejected());
            }
        },
        None => CookieJar::from_headers(req.headers())
            .get(AUTH_COOKIE)
            .map(|c| c.value().to_string())
            .unwrap_or_default(),
    };
    if token.is_empty() {
        tracing::warn!(path = %path, "missing Authorization header and auth_token cookie");
        return Err(rejected());
    }

    match state.tokens.verify(&token) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(path = %path, err = %e, "token validation failed");
            Err(rejected())
        }
    }
}
