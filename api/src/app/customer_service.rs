//! Customer service
//!
//! Orchestrates the customer repository: assigns identifiers on create and
//! loads the stored record before every mutation. Repository errors are
//! returned as they are.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{Customer, CustomerId, CustomerUpdate, NewCustomer};
use crate::domain::ports::{CustomerRepository, CustomerUsecase};
use crate::error::DomainError;

/// Service for managing customers
pub struct CustomerService<CR>
where
    CR: CustomerRepository,
{
    customers: Arc<CR>,
}

impl<CR> CustomerService<CR>
where
    CR: CustomerRepository,
{
    pub fn new(customers: Arc<CR>) -> Self {
        Self { customers }
    }
}

#[async_trait]
impl<CR> CustomerUsecase for CustomerService<CR>
where
    CR: CustomerRepository,
{
    async fn create_customer(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        let id = CustomerId::generate();
        let created = self.customers.create(&id, &customer).await?;

        tracing::info!(customer_id = %created.id, "Customer created");
        Ok(created)
    }

    async fn get_customer_by_id(&self, id: &CustomerId) -> Result<Customer, DomainError> {
        tracing::debug!(customer_id = %id, "Looking up customer");
        self.customers.find_by_id(id).await
    }

    async fn update_customer_by_id(
        &self,
        update: &CustomerUpdate,
        id: &CustomerId,
    ) -> Result<(), DomainError> {
        let mut existing = self.customers.find_by_id(id).await?;

        update.apply_to(&mut existing);
        self.customers.update(&existing).await?;

        tracing::info!(customer_id = %existing.id, "Customer updated");
        Ok(())
    }

    async fn del_customer_by_id(&self, id: &CustomerId) -> Result<(), DomainError> {
        let existing = self.customers.find_by_id(id).await?;

        self.customers.delete_by_id(&existing.id).await?;

        tracing::info!(customer_id = %existing.id, "Customer deleted");
        Ok(())
    }
}
