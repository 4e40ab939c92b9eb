//! Inventory items: barcode-keyed stock records linked to categories.

pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use service::InventoryService;
