//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{Customer, CustomerId, NewCustomer};

/// Create a stored test customer with a fresh id
pub fn test_customer() -> Customer {
    test_customer_named("John Doe", 23)
}

/// Create a stored test customer with specific fields
pub fn test_customer_named(name: &str, age: i32) -> Customer {
    let now = Utc::now();
    Customer {
        id: CustomerId::generate(),
        name: name.to_string(),
        age,
        created_at: now,
        updated_at: now,
    }
}

/// Create valid creation input
pub fn test_new_customer() -> NewCustomer {
    NewCustomer {
        name: "John Doe".to_string(),
        age: 30,
    }
}
