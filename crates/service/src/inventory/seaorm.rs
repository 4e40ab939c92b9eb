use std::collections::BTreeSet;

use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait, QueryOrder, QuerySelect, TransactionTrait};
use tracing::debug;

use models::errors::ModelError;
use models::{category, inventory, inventory_category};
use super::domain::Item;
use super::repository::InventoryRepository;
use crate::errors::ServiceError;
use crate::pagination::PageRequest;
use crate::response::ErrorDetail;

pub struct SeaOrmInventoryRepository {
    pub db: DatabaseConnection,
}

fn map_write_err(err: ModelError) -> ServiceError {
    match err {
        ModelError::Conflict(msg) => {
            debug!(constraint = %msg, "unique constraint rejected item");
            ServiceError::Conflict(ErrorDetail::item_already_exists())
        }
        other => other.into(),
    }
}

#[async_trait::async_trait]
impl InventoryRepository for SeaOrmInventoryRepository {
    async fn barcode_exists(&self, barcode: &str) -> Result<bool, ServiceError> {
        Ok(inventory::find_by_barcode(&self.db, barcode).await?.is_some())
    }

    async fn create(&self, item: Item) -> Result<Item, ServiceError> {
        let names = item.category_names();
        let txn = self.db.begin().await.map_err(ServiceError::internal)?;

        let found = category::find_by_names(&txn, &names).await?;
        if let Some(missing) = names.iter().find(|n| !found.iter().any(|c| &c.name == *n)) {
            return Err(ServiceError::NotFound(ErrorDetail::category_not_found(missing)));
        }

        let row = inventory::create(&txn, (&item).into()).await.map_err(map_write_err)?;
        let ids: Vec<i32> = found.iter().map(|c| c.id).collect();
        inventory_category::link(&txn, row.id, &ids).await.map_err(map_write_err)?;
        txn.commit().await.map_err(ServiceError::internal)?;

        let categories = found.into_iter().map(|c| c.name).collect();
        Ok(Item::from_model(row, Some(categories)))
    }

    async fn find_page(&self, page: PageRequest) -> Result<(Vec<Item>, u64), ServiceError> {
        let total = inventory::Entity::find().count(&self.db).await.map_err(ServiceError::internal)?;
        let rows = inventory::Entity::find()
            .order_by_asc(inventory::Column::Id)
            .offset(page.offset())
            .limit(page.size)
            .all(&self.db)
            .await
            .map_err(ServiceError::internal)?;
        Ok((rows.into_iter().map(|m| Item::from_model(m, None)).collect(), total))
    }

    async fn find_by_barcode(&self, barcode: &str) -> Result<Option<Item>, ServiceError> {
        let Some(row) = inventory::find_by_barcode(&self.db, barcode).await? else { return Ok(None) };
        let categories: BTreeSet<String> = row
            .find_related(category::Entity)
            .all(&self.db)
            .await
            .map_err(ServiceError::internal)?
            .into_iter()
            .map(|c| c.name)
            .collect();
        Ok(Some(Item::from_model(row, Some(categories))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use uuid::Uuid;

    fn unique(prefix: &str) -> String {
        format!("{prefix}{}", &Uuid::new_v4().simple().to_string()[..10])
    }

    #[tokio::test]
    async fn create_links_categories_and_lookup_returns_them() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmInventoryRepository { db: db.clone() };
        let cat = category::create(&db, &unique("cat_")).await?;

        let item = Item {
            barcode: unique("bc"),
            item_name: "Milk".into(),
            description: String::new(),
            quantity: 3,
            buying_price: 1.0,
            selling_price: 1.5,
            categories: Some(BTreeSet::from([cat.name.clone()])),
        };
        repo.create(item.clone()).await?;
        let found = repo.find_by_barcode(&item.barcode).await?.expect("stored item");
        assert_eq!(found.categories, item.categories);

        let dup = repo.create(item.clone()).await;
        assert!(matches!(dup, Err(ServiceError::Conflict(_))));

        let unknown = Item { barcode: unique("bc"), categories: Some(BTreeSet::from([unique("none_")])), ..item };
        assert!(matches!(repo.create(unknown.clone()).await, Err(ServiceError::NotFound(_))));
        assert!(!repo.barcode_exists(&unknown.barcode).await?);

        let (page, total) = repo.find_page(PageRequest::new(0, 5)).await?;
        assert!(total >= 1);
        assert!(page.len() <= 5);
        assert!(page.iter().all(|i| i.categories.is_none()));
        Ok(())
    }
}
