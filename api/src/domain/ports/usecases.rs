//! Use case port traits
//!
//! Inbound ports: what the HTTP layer may ask of the application layer.
//! Keeping this behind a trait lets `AppState` hold any implementation.

use async_trait::async_trait;

use crate::domain::entities::{Customer, CustomerId, CustomerUpdate, NewCustomer};
use crate::error::DomainError;

#[async_trait]
pub trait CustomerUsecase: Send + Sync {
    /// Assign a fresh id and persist the customer
    async fn create_customer(&self, customer: NewCustomer) -> Result<Customer, DomainError>;

    async fn get_customer_by_id(&self, id: &CustomerId) -> Result<Customer, DomainError>;

    /// Load the customer, overwrite name/age, save it back
    async fn update_customer_by_id(
        &self,
        update: &CustomerUpdate,
        id: &CustomerId,
    ) -> Result<(), DomainError>;

    /// Load the customer, then soft delete it by its stored id
    async fn del_customer_by_id(&self, id: &CustomerId) -> Result<(), DomainError>;
}
