use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Sign-up input
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[validate(length(min = 3, max = 64, message = "username must be 3-64 characters"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"), length(max = 255))]
    pub email: String,
    #[validate(length(min = 1, max = 128, message = "password must not be empty"))]
    pub password: String,
    /// Checked against stored roles by the sign-up workflow.
    pub role: i32,
    #[validate(length(min = 1, max = 128, message = "firstName must not be empty"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = 128))]
    pub last_name: String,
    #[serde(default)]
    #[validate(length(max = 32))]
    pub phone_number: String,
    #[serde(default)]
    #[validate(length(max = 512))]
    pub address: String,
}

/// Sign-in input; either `username` or `email` identifies the principal.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_identity"))]
pub struct SignInRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

fn is_blank(v: &Option<String>) -> bool {
    v.as_deref().map_or(true, |s| s.trim().is_empty())
}

fn validate_identity(req: &SignInRequest) -> Result<(), ValidationError> {
    if is_blank(&req.username) && is_blank(&req.email) {
        let mut err = ValidationError::new("identity_required");
        err.message = Some("username or email is required".into());
        return Err(err);
    }
    Ok(())
}

impl SignInRequest {
    /// Label for logs: the username when given, otherwise the email.
    pub fn identity(&self) -> &str {
        self.username
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or_default()
    }
}

/// Sign-in result payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub access_token: String,
}

/// Persisted user identity (business view)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: i32,
    pub created_date: DateTime<Utc>,
}

/// Principal about to be created; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewPrincipal {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: i32,
}

/// Profile fields owned by a principal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDetail {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
}

impl From<models::user::Model> for Principal {
    fn from(m: models::user::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            email: m.email,
            password_hash: m.password,
            role_id: m.role_id,
            created_date: m.created_date.with_timezone(&Utc),
        }
    }
}

impl From<ProfileDetail> for models::user_detail::NewUserDetail {
    fn from(p: ProfileDetail) -> Self {
        Self { first_name: p.first_name, last_name: p.last_name, phone_number: p.phone_number, address: p.address }
    }
}

impl SignUpRequest {
    pub fn profile(&self) -> ProfileDetail {
        ProfileDetail {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone_number: self.phone_number.clone(),
            address: self.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn sign_up() -> SignUpRequest {
        SignUpRequest {
            username: "alice".into(),
            email: "a@x.com".into(),
            password: "pw123".into(),
            role: 1,
            first_name: "Alice".into(),
            last_name: "Liddell".into(),
            phone_number: "0800".into(),
            address: "Wonderland".into(),
        }
    }

    #[test]
    fn sign_up_example_is_valid() {
        assert!(sign_up().validate().is_ok());
    }

    #[test]
    fn sign_up_rejects_bad_email_but_leaves_role_to_the_workflow() {
        let req = SignUpRequest { email: "not-an-email".into(), role: 0, ..sign_up() };
        let errs = req.validate().unwrap_err();
        let fields = errs.field_errors();
        assert!(fields.contains_key("email"));
        assert!(!fields.contains_key("role"));
        assert!(SignUpRequest { role: -1, ..sign_up() }.validate().is_ok());
    }

    #[test]
    fn sign_up_deserializes_camel_case_with_optional_profile_fields() {
        let req: SignUpRequest = serde_json::from_str(
            r#"{"username":"bob","email":"b@x.com","password":"pw","role":2,"firstName":"Bob"}"#,
        )
        .unwrap();
        assert_eq!(req.first_name, "Bob");
        assert!(req.last_name.is_empty());
    }

    #[test]
    fn sign_in_requires_username_or_email() {
        let req = SignInRequest { username: None, email: Some("  ".into()), password: "pw".into() };
        assert!(req.validate().is_err());
        let req = SignInRequest { username: None, email: Some("a@x.com".into()), password: "pw".into() };
        assert!(req.validate().is_ok());
        assert_eq!(req.identity(), "a@x.com");
    }
}
