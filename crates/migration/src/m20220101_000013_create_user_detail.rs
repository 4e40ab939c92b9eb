//! Create `user_detail` table.
//!
//! One profile row per user, removed together with its user.
use sea_orm_migration::{prelude::*, schema::*};

use crate::m20220101_000012_create_user::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserDetail::Table)
                    .if_not_exists()
                    .col(uuid(UserDetail::Id).primary_key())
                    .col(uuid(UserDetail::UserId).unique_key().not_null())
                    .col(string_len(UserDetail::FirstName, 128).not_null())
                    .col(string_len(UserDetail::LastName, 128).not_null())
                    .col(string_len(UserDetail::PhoneNumber, 32).not_null())
                    .col(string_len(UserDetail::Address, 512).not_null())
                    .col(timestamp_with_time_zone(UserDetail::CreatedDate).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_detail_user")
                            .from(UserDetail::Table, UserDetail::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserDetail::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserDetail { Table, Id, UserId, FirstName, LastName, PhoneNumber, Address, CreatedDate }
