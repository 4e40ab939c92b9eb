use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{category, errors, inventory_category};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub barcode: String,
    pub item_name: String,
    pub description: String,
    pub quantity: i32,
    pub buying_price: f64,
    pub selling_price: f64,
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

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { inventory_category::Relation::Category.def() }
    fn via() -> Option<RelationDef> { Some(inventory_category::Relation::Inventory.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// Column values for a new inventory row.
#[derive(Clone, Debug, Default)]
pub struct NewInventory {
    pub barcode: String,
    pub item_name: String,
    pub description: String,
    pub quantity: i32,
    pub buying_price: f64,
    pub selling_price: f64,
}

pub fn validate(item: &NewInventory) -> Result<(), errors::ModelError> {
    if item.barcode.trim().is_empty() { return Err(errors::ModelError::Validation("barcode required".into())); }
    if item.item_name.trim().is_empty() { return Err(errors::ModelError::Validation("item name required".into())); }
    if item.quantity < 0 { return Err(errors::ModelError::Validation("quantity must be >= 0".into())); }
    if item.buying_price <= 0.0 || item.selling_price <= 0.0 {
        return Err(errors::ModelError::Validation("prices must be > 0".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, item: NewInventory) -> Result<Model, errors::ModelError> {
    validate(&item)?;
    let am = ActiveModel {
        id: NotSet,
        barcode: Set(item.barcode),
        item_name: Set(item.item_name),
        description: Set(item.description),
        quantity: Set(item.quantity),
        buying_price: Set(item.buying_price),
        selling_price: Set(item.selling_price),
        created_date: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_barcode<C: ConnectionTrait>(db: &C, barcode: &str) -> Result<Option<Model>, errors::ModelError> {
    let found = Entity::find().filter(Column::Barcode.eq(barcode)).one(db).await?;
    Ok(found)
}
