//! SeaORM entities for the koopos schema plus small query helpers.
//!
//! Helpers are generic over `ConnectionTrait` so they run equally on a pooled
//! connection or inside a transaction.

pub mod errors;
pub mod db;
pub mod role;
pub mod user;
pub mod user_detail;
pub mod category;
pub mod inventory;
pub mod inventory_category;

#[cfg(test)]
mod tests;
