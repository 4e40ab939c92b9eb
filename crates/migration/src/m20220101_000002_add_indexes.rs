use sea_orm_migration::prelude::*;

use crate::m20220101_000012_create_user::User;
use crate::m20220101_000016_create_inventory_category::InventoryCategory;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // User: index on role_id
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_role")
                    .table(User::Table)
                    .col(User::RoleId)
                    .to_owned(),
            )
            .await?;

        // InventoryCategory: reverse lookup by category
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_inventory_category_category")
                    .table(InventoryCategory::Table)
                    .col(InventoryCategory::CategoryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_inventory_category_category").table(InventoryCategory::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_user_role").table(User::Table).to_owned())
            .await
    }
}
