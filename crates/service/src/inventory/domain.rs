use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use models::inventory::{Model, NewInventory};

/// Inventory item as exchanged with clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[validate(length(min = 1, max = 64, message = "barcode must be 1-64 characters"))]
    pub barcode: String,
    #[validate(length(min = 1, max = 255, message = "itemName must not be empty"))]
    pub item_name: String,
    #[serde(default)]
    #[validate(length(max = 1024))]
    pub description: String,
    #[validate(range(min = 0, message = "quantity must not be negative"))]
    pub quantity: i32,
    #[validate(range(min = 0.01, message = "buyingPrice must be positive"))]
    pub buying_price: f64,
    #[validate(range(min = 0.01, message = "sellingPrice must be positive"))]
    pub selling_price: f64,
    /// Category names; omitted from listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeSet<String>>,
}

impl Item {
    /// Build from a stored row; an empty category set is reported as absent.
    pub fn from_model(m: Model, categories: Option<BTreeSet<String>>) -> Self {
        Self {
            barcode: m.barcode,
            item_name: m.item_name,
            description: m.description,
            quantity: m.quantity,
            buying_price: m.buying_price,
            selling_price: m.selling_price,
            categories: categories.filter(|c| !c.is_empty()),
        }
    }

    pub fn without_categories(self) -> Self {
        Self { categories: None, ..self }
    }

    /// Trimmed, de-duplicated category names.
    pub fn category_names(&self) -> Vec<String> {
        let names: BTreeSet<String> = self.categories.iter().flatten().map(|n| n.trim().to_string()).collect();
        names.into_iter().collect()
    }
}

impl From<&Item> for NewInventory {
    fn from(item: &Item) -> Self {
        Self {
            barcode: item.barcode.clone(),
            item_name: item.item_name.clone(),
            description: item.description.clone(),
            quantity: item.quantity,
            buying_price: item.buying_price,
            selling_price: item.selling_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn apple() -> Item {
        Item {
            barcode: "8991001".into(),
            item_name: "Apple".into(),
            description: "Fuji".into(),
            quantity: 12,
            buying_price: 1.5,
            selling_price: 2.25,
            categories: Some(BTreeSet::from(["Fruit".to_string()])),
        }
    }

    #[test]
    fn valid_item_passes() {
        assert!(apple().validate().is_ok());
    }

    #[test]
    fn negative_quantity_and_zero_price_fail() {
        let item = Item { quantity: -1, selling_price: 0.0, ..apple() };
        let errs = item.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("quantity"));
        assert!(errs.field_errors().contains_key("selling_price"));
    }

    #[test]
    fn category_names_are_trimmed() {
        let item = Item { categories: Some(BTreeSet::from([" Fruit".to_string(), "Fruit ".to_string()])), ..apple() };
        assert_eq!(item.category_names(), vec!["Fruit".to_string()]);
    }

    #[test]
    fn listing_form_omits_categories() {
        let body = serde_json::to_value(apple().without_categories()).unwrap();
        assert!(body.get("categories").is_none());
        assert_eq!(body["itemName"], "Apple");

        let body = serde_json::to_value(apple()).unwrap();
        assert_eq!(body["categories"], json!(["Fruit"]));
    }
}
