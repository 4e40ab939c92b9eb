//! Create `inventory` table.
//!
//! Items are addressed externally by their unique barcode.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inventory::Table)
                    .if_not_exists()
                    .col(pk_auto(Inventory::Id))
                    .col(string_len(Inventory::Barcode, 64).unique_key().not_null())
                    .col(string_len(Inventory::ItemName, 255).not_null())
                    .col(text(Inventory::Description).not_null())
                    .col(integer(Inventory::Quantity).not_null())
                    .col(double(Inventory::BuyingPrice).not_null())
                    .col(double(Inventory::SellingPrice).not_null())
                    .col(timestamp_with_time_zone(Inventory::CreatedDate).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Inventory::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Inventory {
    Table,
    Id,
    Barcode,
    ItemName,
    Description,
    Quantity,
    BuyingPrice,
    SellingPrice,
    CreatedDate,
}
