//! Business layer of the koopos backend.
//! - Sign-up / sign-in workflows over a credential store, password encoder and token issuer.
//! - Inventory and category services.
//! - The response envelope and error taxonomy every endpoint answers with.

pub mod auth;
pub mod category;
pub mod errors;
pub mod inventory;
pub mod pagination;
pub mod response;
pub mod validation;
#[cfg(test)]
pub mod test_support;
