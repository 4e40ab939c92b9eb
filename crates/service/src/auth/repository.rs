use async_trait::async_trait;

use super::domain::{NewPrincipal, Principal, ProfileDetail};
use crate::errors::ServiceError;

/// Gateway over persisted principals and roles.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Blank identifiers are ignored; with both blank nothing matches.
    async fn find_by_username_or_email(&self, username: Option<&str>, email: Option<&str>) -> Result<Option<Principal>, ServiceError>;
    async fn exists_by_username_or_email(&self, username: &str, email: &str) -> Result<bool, ServiceError>;
    async fn role_exists(&self, role_id: i32) -> Result<bool, ServiceError>;

    /// Persist the principal and its profile as one unit of work.
    ///
    /// Fails with `Conflict` when username/email is taken and `NotFound` when the
    /// role is unknown, even if a concurrent request slipped past the pre-checks.
    async fn create_principal(&self, principal: NewPrincipal, profile: ProfileDetail) -> Result<Principal, ServiceError>;
}

/// Simple in-memory store for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashSet;
    use chrono::Utc;
    use tokio::sync::Mutex;
    use uuid::Uuid;

    use crate::response::ErrorDetail;

    pub struct MemoryCredentialStore {
        roles: Mutex<HashSet<i32>>,
        principals: Mutex<Vec<(Principal, ProfileDetail)>>,
    }

    impl Default for MemoryCredentialStore {
        /// Knows roles 1 and 2, like a freshly migrated database.
        fn default() -> Self { Self::with_roles([1, 2]) }
    }

    impl MemoryCredentialStore {
        pub fn with_roles(roles: impl IntoIterator<Item = i32>) -> Self {
            Self { roles: Mutex::new(roles.into_iter().collect()), principals: Mutex::new(Vec::new()) }
        }

        pub async fn principal_count(&self) -> usize { self.principals.lock().await.len() }

        pub async fn profile_of(&self, username: &str) -> Option<ProfileDetail> {
            let principals = self.principals.lock().await;
            principals.iter().find(|(p, _)| p.username == username).map(|(_, d)| d.clone())
        }

        pub async fn principal(&self, username: &str) -> Option<Principal> {
            let principals = self.principals.lock().await;
            principals.iter().find(|(p, _)| p.username == username).map(|(p, _)| p.clone())
        }
    }

    fn matches(p: &Principal, username: Option<&str>, email: Option<&str>) -> bool {
        username.is_some_and(|u| !u.trim().is_empty() && p.username == u)
            || email.is_some_and(|e| !e.trim().is_empty() && p.email == e)
    }

    #[async_trait]
    impl CredentialStore for MemoryCredentialStore {
        async fn find_by_username_or_email(&self, username: Option<&str>, email: Option<&str>) -> Result<Option<Principal>, ServiceError> {
            let principals = self.principals.lock().await;
            Ok(principals.iter().find(|(p, _)| matches(p, username, email)).map(|(p, _)| p.clone()))
        }

        async fn exists_by_username_or_email(&self, username: &str, email: &str) -> Result<bool, ServiceError> {
            Ok(self.find_by_username_or_email(Some(username), Some(email)).await?.is_some())
        }

        async fn role_exists(&self, role_id: i32) -> Result<bool, ServiceError> {
            Ok(self.roles.lock().await.contains(&role_id))
        }

        async fn create_principal(&self, principal: NewPrincipal, profile: ProfileDetail) -> Result<Principal, ServiceError> {
            // Both locks are held so the checks and the insert behave like one transaction.
            let roles = self.roles.lock().await;
            let mut principals = self.principals.lock().await;
            if principals.iter().any(|(p, _)| p.username == principal.username || p.email == principal.email) {
                return Err(ServiceError::Conflict(ErrorDetail::user_already_exists()));
            }
            if !roles.contains(&principal.role_id) {
                return Err(ServiceError::NotFound(ErrorDetail::user_invalid_role()));
            }
            let created = Principal {
                id: Uuid::new_v4(),
                username: principal.username,
                email: principal.email,
                password_hash: principal.password_hash,
                role_id: principal.role_id,
                created_date: Utc::now(),
            };
            principals.push((created.clone(), profile));
            Ok(created)
        }
    }
}
