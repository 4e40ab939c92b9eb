use async_trait::async_trait;

use super::domain::Item;
use crate::errors::ServiceError;
use crate::pagination::PageRequest;

/// Storage seam for inventory items and their category links.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn barcode_exists(&self, barcode: &str) -> Result<bool, ServiceError>;

    /// Insert the item and link its categories atomically.
    ///
    /// Unknown category names fail with `NotFound`, a taken barcode with `Conflict`.
    async fn create(&self, item: Item) -> Result<Item, ServiceError>;

    /// One validated page ordered by insertion, plus the total item count.
    async fn find_page(&self, page: PageRequest) -> Result<(Vec<Item>, u64), ServiceError>;

    /// Lookup with categories attached.
    async fn find_by_barcode(&self, barcode: &str) -> Result<Option<Item>, ServiceError>;
}

pub mod mock {
    use super::*;
    use std::collections::BTreeSet;
    use tokio::sync::Mutex;

    use crate::response::ErrorDetail;

    #[derive(Default)]
    pub struct MemoryInventoryRepository {
        categories: BTreeSet<String>,
        items: Mutex<Vec<Item>>,
    }

    impl MemoryInventoryRepository {
        pub fn with_categories<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
            Self { categories: names.into_iter().map(Into::into).collect(), items: Mutex::new(Vec::new()) }
        }

        pub async fn len(&self) -> usize { self.items.lock().await.len() }
    }

    #[async_trait]
    impl InventoryRepository for MemoryInventoryRepository {
        async fn barcode_exists(&self, barcode: &str) -> Result<bool, ServiceError> {
            Ok(self.items.lock().await.iter().any(|i| i.barcode == barcode))
        }

        async fn create(&self, item: Item) -> Result<Item, ServiceError> {
            let mut items = self.items.lock().await;
            if items.iter().any(|i| i.barcode == item.barcode) {
                return Err(ServiceError::Conflict(ErrorDetail::item_already_exists()));
            }
            if let Some(missing) = item.category_names().iter().find(|n| !self.categories.contains(n.as_str())) {
                return Err(ServiceError::NotFound(ErrorDetail::category_not_found(missing)));
            }
            let names: std::collections::BTreeSet<String> = item.category_names().into_iter().collect();
            let stored = Item { categories: Some(names).filter(|c| !c.is_empty()), ..item };
            items.push(stored.clone());
            Ok(stored)
        }

        async fn find_page(&self, page: PageRequest) -> Result<(Vec<Item>, u64), ServiceError> {
            let items = self.items.lock().await;
            let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
            let take = usize::try_from(page.size).unwrap_or(usize::MAX);
            let slice = items.iter().skip(offset).take(take).cloned().map(Item::without_categories).collect();
            Ok((slice, items.len() as u64))
        }

        async fn find_by_barcode(&self, barcode: &str) -> Result<Option<Item>, ServiceError> {
            Ok(self.items.lock().await.iter().find(|i| i.barcode == barcode).cloned())
        }
    }
}
