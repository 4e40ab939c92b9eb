use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, inventory, inventory_category};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub created_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    InventoryCategory,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::InventoryCategory => Entity::has_many(inventory_category::Entity).into(),
        }
    }
}

impl Related<inventory::Entity> for Entity {
    fn to() -> RelationDef { inventory_category::Relation::Inventory.def() }
    fn via() -> Option<RelationDef> { Some(inventory_category::Relation::Category.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.trim().to_string()),
        created_date: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

pub async fn exists_by_name<C: ConnectionTrait>(db: &C, name: &str) -> Result<bool, errors::ModelError> {
    let found = Entity::find().filter(Column::Name.eq(name.trim())).one(db).await?;
    Ok(found.is_some())
}

pub async fn find_by_names<C: ConnectionTrait>(db: &C, names: &[String]) -> Result<Vec<Model>, errors::ModelError> {
    if names.is_empty() { return Ok(Vec::new()); }
    let found = Entity::find().filter(Column::Name.is_in(names.iter().map(|n| n.trim()))).all(db).await?;
    Ok(found)
}
