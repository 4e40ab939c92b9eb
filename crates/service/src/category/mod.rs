//! Item categories.

pub mod repository;
pub mod service;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use service::CategoryService;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    #[validate(length(min = 1, max = 64, message = "name must be 1-64 characters"))]
    pub name: String,
}
