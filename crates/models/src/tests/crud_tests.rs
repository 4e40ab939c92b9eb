use crate::{category, inventory, inventory_category, role, user, user_detail};
use crate::errors::ModelError;
use super::setup_test_db;
use sea_orm::{EntityTrait, ModelTrait};
use anyhow::Result;
use uuid::Uuid;

#[tokio::test]
async fn seeded_roles_exist() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    for name in migration::DEFAULT_ROLES {
        let found = role::Entity::find()
            .all(&db)
            .await?
            .into_iter()
            .any(|r| r.name == name);
        assert!(found, "role {name} should be seeded");
    }
    assert!(!role::exists(&db, i32::MAX).await?);
    Ok(())
}

#[tokio::test]
async fn user_with_detail_crud() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let suffix = Uuid::new_v4().simple().to_string();
    let username = format!("user_{}", &suffix[..12]);
    let email = format!("{username}@example.com");
    let u = user::create(&db, &username, &email, "$argon2id$v=19$stub".into(), 1).await?;
    let d = user_detail::create(&db, u.id, user_detail::NewUserDetail {
        first_name: "Alice".into(),
        last_name: "Liddell".into(),
        phone_number: "0800".into(),
        address: "Rabbit hole 1".into(),
    }).await?;
    assert_eq!(d.user_id, u.id);

    let by_email = user::find_by_username_or_email(&db, None, Some(&email)).await?;
    assert_eq!(by_email.map(|m| m.id), Some(u.id));
    let by_name = user::find_by_username_or_email(&db, Some(&username), Some("nobody@example.com")).await?;
    assert_eq!(by_name.map(|m| m.id), Some(u.id));
    assert!(user::exists_by_username_or_email(&db, "someone-else", &email).await?);

    // Duplicate username surfaces as a conflict from the unique constraint
    let dup = user::create(&db, &username, "other@example.com", "hash".into(), 1).await;
    assert!(matches!(dup, Err(ModelError::Conflict(_))));

    // Unknown role surfaces as a missing reference
    let bad_role = user::create(&db, &format!("x{}", &suffix[..10]), &format!("x{suffix}@example.com"), "hash".into(), i32::MAX).await;
    assert!(matches!(bad_role, Err(ModelError::MissingReference(_))));

    // Deleting the user cascades to the profile detail
    user::hard_delete(&db, u.id).await?;
    assert!(user_detail::find_by_user(&db, u.id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn inventory_links_categories() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let suffix = Uuid::new_v4().simple().to_string();
    let cat = category::create(&db, &format!("Dairy {suffix}")).await?;
    let item = inventory::create(&db, inventory::NewInventory {
        barcode: format!("BC{suffix}"),
        item_name: "Milk".into(),
        description: "1L".into(),
        quantity: 3,
        buying_price: 1.25,
        selling_price: 1.99,
    }).await?;
    inventory_category::link(&db, item.id, &[cat.id]).await?;

    let found = inventory::find_by_barcode(&db, &item.barcode).await?.expect("item by barcode");
    let cats = found.find_related(category::Entity).all(&db).await?;
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].name, cat.name);

    let by_names = category::find_by_names(&db, &[cat.name.clone()]).await?;
    assert_eq!(by_names.len(), 1);

    inventory::Entity::delete_by_id(item.id).exec(&db).await?;
    category::Entity::delete_by_id(cat.id).exec(&db).await?;
    Ok(())
}

#[test]
fn inventory_validation_rejects_bad_values() {
    let base = inventory::NewInventory {
        barcode: "123".into(),
        item_name: "Bread".into(),
        description: String::new(),
        quantity: 0,
        buying_price: 1.0,
        selling_price: 1.5,
    };
    assert!(inventory::validate(&base).is_ok());
    assert!(inventory::validate(&inventory::NewInventory { quantity: -1, ..base.clone() }).is_err());
    assert!(inventory::validate(&inventory::NewInventory { selling_price: 0.0, ..base.clone() }).is_err());
    assert!(inventory::validate(&inventory::NewInventory { barcode: " ".into(), ..base }).is_err());
}
