//! Authentication: domain types, credential store, password encoder, token issuer
//! and the sign-up / sign-in workflows built on them.

pub mod domain;
pub mod password;
pub mod repo;
pub mod repository;
pub mod service;
pub mod token;

pub use service::AuthService;
