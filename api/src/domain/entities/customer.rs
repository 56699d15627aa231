//! Customer domain entity
//!
//! A customer is the only record this service manages. Its identifier is
//! produced by the application layer, never by the caller or the store.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a customer
///
/// Format: `<YYYYMMDDHHMMSS local time>-<uuid v4>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub String);

impl CustomerId {
    /// Generate a fresh time-prefixed identifier
    pub fn generate() -> Self {
        let stamp = Local::now().format("%Y%m%d%H%M%S");
        Self(format!("{}-{}", stamp, Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CustomerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A live (not soft-deleted) customer
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to create a new customer
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub age: i32,
}

/// Fields that may be overwritten on an existing customer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
}

impl CustomerUpdate {
    /// Overwrite name and age on `customer`; identity and timestamps are untouched
    pub fn apply_to(&self, customer: &mut Customer) {
        if let Some(name) = &self.name {
            customer.name = name.clone();
        }
        if let Some(age) = self.age {
            customer.age = age;
        }
    }
}
