//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod customers;
pub mod health;
pub mod validation;

pub use customers::{create_customer, delete_customer, get_customer, update_customer};
pub use health::ping;
