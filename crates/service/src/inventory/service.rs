use std::sync::Arc;

use tracing::{info, warn, instrument};

use super::domain::Item;
use super::repository::InventoryRepository;
use crate::errors::ServiceError;
use crate::pagination::PageRequest;
use crate::response::{ErrorDetail, PaginatedResponse, RestResponse};

pub struct InventoryService {
    repo: Arc<dyn InventoryRepository>,
}

impl InventoryService {
    pub fn new(repo: Arc<dyn InventoryRepository>) -> Self { Self { repo } }

    #[instrument(skip(self, item), fields(barcode = %item.barcode))]
    pub async fn create_item(&self, item: Item) -> Result<RestResponse<Item>, ServiceError> {
        if self.repo.barcode_exists(&item.barcode).await? {
            warn!("item with same barcode already exists");
            return Err(ServiceError::Conflict(ErrorDetail::item_already_exists()));
        }
        let created = self.repo.create(item).await?;
        info!("item created");
        Ok(RestResponse::success_with(created))
    }

    /// Page of items without their categories.
    pub async fn find_paginated_inventories(&self, page: PageRequest) -> Result<PaginatedResponse<Item>, ServiceError> {
        page.validate()?;
        let (items, total) = self.repo.find_page(page).await?;
        let items = items.into_iter().map(Item::without_categories).collect();
        Ok(PaginatedResponse::from_page(items, page.page, page.size, total))
    }

    pub async fn find_item_by_barcode(&self, barcode: &str) -> Result<RestResponse<Item>, ServiceError> {
        match self.repo.find_by_barcode(barcode).await? {
            Some(item) => Ok(RestResponse::success_with(item)),
            None => Err(ServiceError::NotFound(ErrorDetail::item_not_found())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use crate::inventory::repository::mock::MemoryInventoryRepository;

    fn item(barcode: &str, categories: &[&str]) -> Item {
        Item {
            barcode: barcode.into(),
            item_name: format!("item {barcode}"),
            description: String::new(),
            quantity: 1,
            buying_price: 1.0,
            selling_price: 2.0,
            categories: Some(categories.iter().map(|c| c.to_string()).collect::<BTreeSet<_>>()),
        }
    }

    fn service() -> (Arc<MemoryInventoryRepository>, InventoryService) {
        let repo = Arc::new(MemoryInventoryRepository::with_categories(["Fruit", "Dairy"]));
        (repo.clone(), InventoryService::new(repo))
    }

    #[tokio::test]
    async fn create_then_lookup_includes_categories() {
        let (_, svc) = service();
        svc.create_item(item("001", &["Fruit"])).await.unwrap();

        let found = svc.find_item_by_barcode("001").await.unwrap().data.unwrap();
        assert_eq!(found.categories, Some(BTreeSet::from(["Fruit".to_string()])));
    }

    #[tokio::test]
    async fn duplicate_barcode_conflicts() {
        let (repo, svc) = service();
        svc.create_item(item("001", &[])).await.unwrap();
        let err = svc.create_item(item("001", &["Dairy"])).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let (repo, svc) = service();
        let err = svc.create_item(item("001", &["Bakery"])).await.unwrap_err();
        let ServiceError::NotFound(detail) = err else { panic!("expected NotFound") };
        assert_eq!(detail.code, "CATEGORY_NOT_FOUND");
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn missing_barcode_is_not_found() {
        let (_, svc) = service();
        let err = svc.find_item_by_barcode("nope").await.unwrap_err();
        assert_eq!(err.to_envelope().response_status.response_code, "44");
    }

    #[tokio::test]
    async fn listing_reports_one_based_page_and_total() {
        let (_, svc) = service();
        for n in 0..7 {
            svc.create_item(item(&format!("{n:03}"), &["Fruit"])).await.unwrap();
        }

        let page = svc.find_paginated_inventories(PageRequest::new(1, 5)).await.unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.detail_pages.page, 2);
        assert_eq!(page.detail_pages.row_per_page, 5);
        assert_eq!(page.detail_pages.total_data, 7);
        assert!(page.data.iter().all(|i| i.categories.is_none()));

        let beyond = svc.find_paginated_inventories(PageRequest::new(9, 5)).await.unwrap();
        assert!(beyond.data.is_empty());
        assert_eq!(beyond.detail_pages.total_data, 7);
    }

    #[tokio::test]
    async fn huge_page_index_is_a_validation_error_not_a_panic() {
        let (_, svc) = service();
        svc.create_item(item("001", &[])).await.unwrap();
        let err = svc.find_paginated_inventories(PageRequest::new(u64::MAX / 2, 10)).await.unwrap_err();
        let ServiceError::Validation(details) = err else { panic!("expected Validation") };
        assert_eq!(details[0].field.as_deref(), Some("page"));
    }

    #[tokio::test]
    async fn padded_category_names_match_existing_ones() {
        let (_, svc) = service();
        svc.create_item(item("001", &[" Fruit "])).await.unwrap();
        let found = svc.find_item_by_barcode("001").await.unwrap().data.unwrap();
        assert_eq!(found.categories, Some(BTreeSet::from(["Fruit".to_string()])));
    }

    #[tokio::test]
    async fn zero_size_is_a_validation_error() {
        let (_, svc) = service();
        let err = svc.find_paginated_inventories(PageRequest::new(0, 0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
