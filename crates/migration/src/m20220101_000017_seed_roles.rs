//! Seed the default roles so a fresh database accepts sign-ups.
//!
//! Inserted in order so `ADMIN` gets id 1 and `CASHIER` id 2.
use sea_orm_migration::prelude::*;

use crate::m20220101_000011_create_role::Role;

pub const DEFAULT_ROLES: [&str; 2] = ["ADMIN", "CASHIER"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in DEFAULT_ROLES {
            let insert = Query::insert()
                .into_table(Role::Table)
                .columns([Role::Name])
                .values_panic([name.into()])
                .on_conflict(OnConflict::column(Role::Name).do_nothing().to_owned())
                .to_owned();
            manager.exec_stmt(insert).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Role::Table)
            .and_where(Expr::col(Role::Name).is_in(DEFAULT_ROLES))
            .to_owned();
        manager.exec_stmt(delete).await
    }
}
