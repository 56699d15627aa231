//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Customer, CustomerId, NewCustomer};
use crate::domain::ports::CustomerRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Customer Repository
// ============================================================================

/// Soft delete is modelled by moving rows into `deleted`
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<CustomerId, Customer>>>,
    created: Arc<RwLock<Vec<CustomerId>>>,
    deleted: Arc<RwLock<Vec<CustomerId>>>,
    write_error: Option<String>,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a customer for testing
    pub fn with_customer(self, customer: Customer) -> Self {
        self.customers
            .write()
            .unwrap()
            .insert(customer.id.clone(), customer);
        self
    }

    /// Make every write fail with a store error carrying `message`
    pub fn failing_writes(mut self, message: &str) -> Self {
        self.write_error = Some(message.to_string());
        self
    }

    /// Read a live customer without going through the trait
    pub fn get(&self, id: &CustomerId) -> Option<Customer> {
        self.customers.read().unwrap().get(id).cloned()
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    /// Id of the most recent successful create
    pub fn last_created_id(&self) -> Option<CustomerId> {
        self.created.read().unwrap().last().cloned()
    }

    pub fn deleted_ids(&self) -> Vec<CustomerId> {
        self.deleted.read().unwrap().clone()
    }

    fn check_write(&self) -> Result<(), DomainError> {
        match &self.write_error {
            Some(message) => Err(DomainError::Database(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(
        &self,
        id: &CustomerId,
        customer: &NewCustomer,
    ) -> Result<Customer, DomainError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check_write()?;

        let now = Utc::now();
        let created = Customer {
            id: id.clone(),
            name: customer.name.clone(),
            age: customer.age,
            created_at: now,
            updated_at: now,
        };

        let mut customers = self.customers.write().unwrap();
        if customers.contains_key(id) {
            return Err(DomainError::Database(
                "UNIQUE constraint failed: customers.id".to_string(),
            ));
        }
        customers.insert(id.clone(), created.clone());
        self.created.write().unwrap().push(id.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Customer, DomainError> {
        self.customers
            .read()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    async fn update(&self, customer: &Customer) -> Result<(), DomainError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.check_write()?;

        let mut customers = self.customers.write().unwrap();
        if let Some(stored) = customers.get_mut(&customer.id) {
            stored.name = customer.name.clone();
            stored.age = customer.age;
            stored.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &CustomerId) -> Result<(), DomainError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check_write()?;

        if self.customers.write().unwrap().remove(id).is_some() {
            self.deleted.write().unwrap().push(id.clone());
        }
        Ok(())
    }
}
