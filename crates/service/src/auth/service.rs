use std::sync::Arc;

use tracing::{info, warn, instrument};

use super::domain::{NewPrincipal, SignInRequest, SignInResponse, SignUpRequest};
use super::password::PasswordEncoder;
use super::repository::CredentialStore;
use super::token::TokenIssuer;
use crate::errors::ServiceError;
use crate::response::{ErrorDetail, RestResponse};

/// Sign-up and sign-in workflows, independent of the web framework.
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    encoder: Arc<dyn PasswordEncoder>,
    issuer: Arc<dyn TokenIssuer>,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>, encoder: Arc<dyn PasswordEncoder>, issuer: Arc<dyn TokenIssuer>) -> Self {
        Self { store, encoder, issuer }
    }

    /// Register a new principal together with its profile detail.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::auth::{AuthService, domain::SignUpRequest, password::Argon2PasswordEncoder,
    ///     repository::mock::MemoryCredentialStore, token::JwtTokenIssuer};
    /// let store = Arc::new(MemoryCredentialStore::default());
    /// let svc = AuthService::new(store, Arc::new(Argon2PasswordEncoder::new()), Arc::new(JwtTokenIssuer::new("secret", 60)));
    /// let req = SignUpRequest {
    ///     username: "alice".into(), email: "a@x.com".into(), password: "pw123".into(), role: 1,
    ///     first_name: "Alice".into(), last_name: String::new(), phone_number: String::new(), address: String::new(),
    /// };
    /// let resp = tokio_test::block_on(svc.sign_up(req)).unwrap();
    /// assert!(resp.data.is_none());
    /// ```
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn sign_up(&self, request: SignUpRequest) -> Result<RestResponse<()>, ServiceError> {
        if self.store.exists_by_username_or_email(&request.username, &request.email).await? {
            warn!("user with same username or email already exists");
            return Err(ServiceError::Conflict(ErrorDetail::user_already_exists()));
        }
        if !self.store.role_exists(request.role).await? {
            warn!(role = request.role, "sign-up with invalid role");
            return Err(ServiceError::NotFound(ErrorDetail::user_invalid_role()));
        }

        let password_hash = self.encoder.encode(&request.password).map_err(ServiceError::internal)?;
        let profile = request.profile();
        let principal = NewPrincipal {
            username: request.username,
            email: request.email,
            password_hash,
            role_id: request.role,
        };
        let created = self.store.create_principal(principal, profile).await?;

        info!(user_id = %created.id, "user created successfully");
        Ok(RestResponse::success())
    }

    /// Authenticate by username or email and issue an access token.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::auth::{AuthService, domain::{SignInRequest, SignUpRequest}, password::Argon2PasswordEncoder,
    ///     repository::mock::MemoryCredentialStore, token::JwtTokenIssuer};
    /// let svc = AuthService::new(Arc::new(MemoryCredentialStore::default()),
    ///     Arc::new(Argon2PasswordEncoder::new()), Arc::new(JwtTokenIssuer::new("secret", 60)));
    /// let _ = tokio_test::block_on(svc.sign_up(SignUpRequest {
    ///     username: "u".repeat(3), email: "u@e.com".into(), password: "Passw0rd".into(), role: 1,
    ///     first_name: "N".into(), last_name: String::new(), phone_number: String::new(), address: String::new(),
    /// }));
    /// let resp = tokio_test::block_on(svc.sign_in(SignInRequest {
    ///     username: None, email: Some("u@e.com".into()), password: "Passw0rd".into(),
    /// })).unwrap();
    /// assert!(!resp.data.unwrap().access_token.is_empty());
    /// ```
    #[instrument(skip(self, request), fields(identity = %request.identity()))]
    pub async fn sign_in(&self, request: SignInRequest) -> Result<RestResponse<SignInResponse>, ServiceError> {
        let principal = self.store
            .find_by_username_or_email(request.username.as_deref(), request.email.as_deref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(ErrorDetail::user_not_found()))?;

        // Every verifier outcome other than a positive match is the same failure to the caller.
        match self.encoder.verify(&request.password, &principal.password_hash) {
            Ok(true) => {}
            Ok(false) => {
                info!(username = %principal.username, "user is not authenticated");
                return Err(ServiceError::Authentication(ErrorDetail::authentication_failed()));
            }
            Err(e) => {
                warn!(username = %principal.username, error = %e, "password verification failed");
                return Err(ServiceError::Authentication(ErrorDetail::authentication_failed()));
            }
        }

        let access_token = self.issuer.issue(&principal.username).map_err(ServiceError::internal)?;
        info!(username = %principal.username, "user signed in successfully");
        Ok(RestResponse::success_with(SignInResponse { access_token }))
    }
}
