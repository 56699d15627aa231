//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., the SeaORM SQL adapter).

use async_trait::async_trait;

use crate::domain::entities::{Customer, CustomerId, NewCustomer};
use crate::error::DomainError;

/// Repository for Customer entities
///
/// Writes are each wrapped in their own transaction. Store failures surface
/// as `DomainError::Database` carrying the store's message.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a new customer under an already generated id
    async fn create(&self, id: &CustomerId, customer: &NewCustomer)
        -> Result<Customer, DomainError>;

    /// Find the most recently created live customer with this id.
    /// Returns `DomainError::NotFound` when nothing matches.
    async fn find_by_id(&self, id: &CustomerId) -> Result<Customer, DomainError>;

    /// Save every field of an existing customer
    async fn update(&self, customer: &Customer) -> Result<(), DomainError>;

    /// Soft delete. Succeeds even when no row matched.
    async fn delete_by_id(&self, id: &CustomerId) -> Result<(), DomainError>;
}
