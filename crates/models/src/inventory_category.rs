use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{category, errors, inventory};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub inventory_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Inventory,
    Category,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Inventory => Entity::belongs_to(inventory::Entity)
                .from(Column::InventoryId)
                .to(inventory::Column::Id)
                .into(),
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .into(),
        }
    }
}

impl Related<inventory::Entity> for Entity {
    fn to() -> RelationDef { Relation::Inventory.def() }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn link<C: ConnectionTrait>(db: &C, inventory_id: i32, category_ids: &[i32]) -> Result<(), errors::ModelError> {
    if category_ids.is_empty() { return Ok(()); }
    let rows = category_ids.iter().map(|&category_id| ActiveModel {
        inventory_id: Set(inventory_id),
        category_id: Set(category_id),
    });
    Entity::insert_many(rows).exec_without_returning(db).await?;
    Ok(())
}
