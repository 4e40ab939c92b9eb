//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20220101_000011_create_role;
mod m20220101_000012_create_user;
mod m20220101_000013_create_user_detail;
mod m20220101_000014_create_category;
mod m20220101_000015_create_inventory;
mod m20220101_000016_create_inventory_category;
mod m20220101_000017_seed_roles;
mod m20220101_000002_add_indexes;

pub use m20220101_000017_seed_roles::DEFAULT_ROLES;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000011_create_role::Migration),
            Box::new(m20220101_000012_create_user::Migration),
            Box::new(m20220101_000013_create_user_detail::Migration),
            Box::new(m20220101_000014_create_category::Migration),
            Box::new(m20220101_000015_create_inventory::Migration),
            Box::new(m20220101_000016_create_inventory_category::Migration),
            Box::new(m20220101_000017_seed_roles::Migration),
            // Indexes should always be applied last
            Box::new(m20220101_000002_add_indexes::Migration),
        ]
    }
}
