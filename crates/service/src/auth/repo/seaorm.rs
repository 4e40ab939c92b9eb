use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::debug;

use models::errors::ModelError;
use crate::auth::domain::{NewPrincipal, Principal, ProfileDetail};
use crate::auth::repository::CredentialStore;
use crate::errors::ServiceError;
use crate::response::ErrorDetail;

pub struct SeaOrmCredentialStore {
    pub db: DatabaseConnection,
}

/// Constraint violations on the principal write carry registration meaning.
fn map_write_err(err: ModelError) -> ServiceError {
    match err {
        ModelError::Conflict(msg) => {
            debug!(constraint = %msg, "unique constraint rejected sign-up");
            ServiceError::Conflict(ErrorDetail::user_already_exists())
        }
        ModelError::MissingReference(msg) => {
            debug!(constraint = %msg, "role foreign key rejected sign-up");
            ServiceError::NotFound(ErrorDetail::user_invalid_role())
        }
        other => other.into(),
    }
}

#[async_trait::async_trait]
impl CredentialStore for SeaOrmCredentialStore {
    async fn find_by_username_or_email(&self, username: Option<&str>, email: Option<&str>) -> Result<Option<Principal>, ServiceError> {
        let found = models::user::find_by_username_or_email(&self.db, username, email).await?;
        Ok(found.map(Principal::from))
    }

    async fn exists_by_username_or_email(&self, username: &str, email: &str) -> Result<bool, ServiceError> {
        Ok(models::user::exists_by_username_or_email(&self.db, username, email).await?)
    }

    async fn role_exists(&self, role_id: i32) -> Result<bool, ServiceError> {
        Ok(models::role::exists(&self.db, role_id).await?)
    }

    async fn create_principal(&self, principal: NewPrincipal, profile: ProfileDetail) -> Result<Principal, ServiceError> {
        // Dropping `txn` on an early return rolls the whole unit back.
        let txn = self.db.begin().await.map_err(ServiceError::internal)?;
        let user = models::user::create(&txn, &principal.username, &principal.email, principal.password_hash, principal.role_id)
            .await
            .map_err(map_write_err)?;
        models::user_detail::create(&txn, user.id, profile.into())
            .await
            .map_err(map_write_err)?;
        txn.commit().await.map_err(ServiceError::internal)?;
        Ok(user.into())
    }
}
