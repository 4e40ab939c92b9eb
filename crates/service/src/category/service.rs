use std::sync::Arc;

use tracing::{info, warn, instrument};

use super::repository::CategoryRepository;
use super::CategoryRequest;
use crate::errors::ServiceError;
use crate::response::{ErrorDetail, RestResponse};

pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self { Self { repo } }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_category(&self, request: CategoryRequest) -> Result<RestResponse<()>, ServiceError> {
        if self.repo.exists_by_name(&request.name).await? {
            warn!("category already exists");
            return Err(ServiceError::Conflict(ErrorDetail::category_already_exists()));
        }
        self.repo.create(&request.name).await?;
        info!("category created");
        Ok(RestResponse::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::repository::mock::MemoryCategoryRepository;

    #[tokio::test]
    async fn creates_once_then_conflicts() {
        let repo = Arc::new(MemoryCategoryRepository::default());
        let svc = CategoryService::new(repo.clone());

        let ok = svc.create_category(CategoryRequest { name: "Fruit".into() }).await.unwrap();
        assert_eq!(ok.response_status.response_code, "00");

        let err = svc.create_category(CategoryRequest { name: "Fruit".into() }).await.unwrap_err();
        let ServiceError::Conflict(detail) = err else { panic!("expected Conflict") };
        assert_eq!(detail.code, "CATEGORY_ALREADY_EXISTS");
        assert_eq!(repo.names().await, vec!["Fruit".to_string()]);
    }
}
