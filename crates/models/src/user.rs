use sea_orm::{entity::prelude::*, Condition, ConnectionTrait, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::{role, user_detail};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    /// PHC-formatted password hash, never the plaintext.
    #[serde(skip_serializing)]
    pub password: String,
    pub role_id: i32,
    pub created_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Role,
    UserDetail,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Role => Entity::belongs_to(role::Entity).from(Column::RoleId).to(role::Column::Id).into(),
            Relation::UserDetail => Entity::has_one(user_detail::Entity).into(),
        }
    }
}

impl Related<role::Entity> for Entity {
    fn to() -> RelationDef { Relation::Role.def() }
}

impl Related<user_detail::Entity> for Entity {
    fn to() -> RelationDef { Relation::UserDetail.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Match on username OR email; blank inputs are ignored.
fn username_or_email(username: Option<&str>, email: Option<&str>) -> Condition {
    let mut cond = Condition::any();
    if let Some(u) = username.filter(|u| !u.trim().is_empty()) {
        cond = cond.add(Column::Username.eq(u));
    }
    if let Some(e) = email.filter(|e| !e.trim().is_empty()) {
        cond = cond.add(Column::Email.eq(e));
    }
    cond
}

pub async fn find_by_username_or_email<C: ConnectionTrait>(
    db: &C,
    username: Option<&str>,
    email: Option<&str>,
) -> Result<Option<Model>, errors::ModelError> {
    if username.map_or(true, |u| u.trim().is_empty()) && email.map_or(true, |e| e.trim().is_empty()) {
        return Ok(None);
    }
    let found = Entity::find().filter(username_or_email(username, email)).one(db).await?;
    Ok(found)
}

pub async fn exists_by_username_or_email<C: ConnectionTrait>(
    db: &C,
    username: &str,
    email: &str,
) -> Result<bool, errors::ModelError> {
    Ok(find_by_username_or_email(db, Some(username), Some(email)).await?.is_some())
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    username: &str,
    email: &str,
    password_hash: String,
    role_id: i32,
) -> Result<Model, errors::ModelError> {
    if !email.contains('@') { return Err(errors::ModelError::Validation("invalid email".into())); }
    if username.trim().is_empty() { return Err(errors::ModelError::Validation("username required".into())); }
    if password_hash.trim().is_empty() { return Err(errors::ModelError::Validation("password hash required".into())); }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        password: Set(password_hash),
        role_id: Set(role_id),
        created_date: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

pub async fn hard_delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}
