use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::errors::ModelError;
use crate::errors::ServiceError;
use crate::response::ErrorDetail;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn exists_by_name(&self, name: &str) -> Result<bool, ServiceError>;
    async fn create(&self, name: &str) -> Result<(), ServiceError>;
}

pub struct SeaOrmCategoryRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn exists_by_name(&self, name: &str) -> Result<bool, ServiceError> {
        Ok(models::category::exists_by_name(&self.db, name).await?)
    }

    async fn create(&self, name: &str) -> Result<(), ServiceError> {
        match models::category::create(&self.db, name).await {
            Ok(_) => Ok(()),
            Err(ModelError::Conflict(_)) => Err(ServiceError::Conflict(ErrorDetail::category_already_exists())),
            Err(e) => Err(e.into()),
        }
    }
}

pub mod mock {
    use super::*;
    use std::collections::BTreeSet;
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct MemoryCategoryRepository {
        names: Mutex<BTreeSet<String>>,
    }

    impl MemoryCategoryRepository {
        pub async fn names(&self) -> Vec<String> { self.names.lock().await.iter().cloned().collect() }
    }

    #[async_trait]
    impl CategoryRepository for MemoryCategoryRepository {
        async fn exists_by_name(&self, name: &str) -> Result<bool, ServiceError> {
            Ok(self.names.lock().await.contains(name.trim()))
        }

        async fn create(&self, name: &str) -> Result<(), ServiceError> {
            if !self.names.lock().await.insert(name.trim().to_string()) {
                return Err(ServiceError::Conflict(ErrorDetail::category_already_exists()));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn duplicate_name_is_conflict() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmCategoryRepository { db };
        let name = format!("cat_{}", &uuid::Uuid::new_v4().simple().to_string()[..10]);

        repo.create(&name).await?;
        assert!(repo.exists_by_name(&name).await?);
        assert!(matches!(repo.create(&name).await, Err(ServiceError::Conflict(_))));
        Ok(())
    }
}
