//! Create `inventory_category` join table (many-to-many item <-> category).
use sea_orm_migration::{prelude::*, schema::*};

use crate::m20220101_000014_create_category::Category;
use crate::m20220101_000015_create_inventory::Inventory;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryCategory::Table)
                    .if_not_exists()
                    .col(integer(InventoryCategory::InventoryId).not_null())
                    .col(integer(InventoryCategory::CategoryId).not_null())
                    .primary_key(
                        Index::create()
                            .col(InventoryCategory::InventoryId)
                            .col(InventoryCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_category_inventory")
                            .from(InventoryCategory::Table, InventoryCategory::InventoryId)
                            .to(Inventory::Table, Inventory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_category_category")
                            .from(InventoryCategory::Table, InventoryCategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventoryCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum InventoryCategory { Table, InventoryId, CategoryId }
