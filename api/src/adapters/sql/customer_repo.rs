//! SeaORM adapter for CustomerRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::domain::entities::{Customer, CustomerId, NewCustomer};
use crate::domain::ports::CustomerRepository;
use crate::entity::customers;
use crate::error::DomainError;

/// SQL implementation of CustomerRepository (PostgreSQL or SQLite)
pub struct SqlCustomerRepository {
    db: DatabaseConnection,
}

impl SqlCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Commit on success, roll back and hand the write error back on failure
async fn finish(txn: DatabaseTransaction, result: Result<(), DbErr>) -> Result<(), DomainError> {
    match result {
        Ok(()) => {
            txn.commit().await?;
            Ok(())
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!(error = %rollback_err, "Rollback failed");
            }
            Err(e.into())
        }
    }
}

#[async_trait]
impl CustomerRepository for SqlCustomerRepository {
    async fn create(
        &self,
        id: &CustomerId,
        customer: &NewCustomer,
    ) -> Result<Customer, DomainError> {
        let now = Utc::now();

        let model = customers::ActiveModel {
            id: Set(id.0.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            name: Set(customer.name.clone()),
            age: Set(customer.age),
        };

        let txn = self.db.begin().await?;
        let result = customers::Entity::insert(model)
            .exec_without_returning(&txn)
            .await
            .map(|_| ());
        finish(txn, result).await?;

        Ok(Customer {
            id: id.clone(),
            name: customer.name.clone(),
            age: customer.age,
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Customer, DomainError> {
        let result = customers::Entity::find_live()
            .filter(customers::Column::Id.eq(id.as_str()))
            .order_by_desc(customers::Column::CreatedAt)
            .one(&self.db)
            .await?;

        result.map(|m| m.into()).ok_or(DomainError::NotFound)
    }

    async fn update(&self, customer: &Customer) -> Result<(), DomainError> {
        let changes = customers::ActiveModel {
            name: Set(customer.name.clone()),
            age: Set(customer.age),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        let txn = self.db.begin().await?;
        let result = customers::Entity::update_many()
            .set(changes)
            .filter(customers::Column::Id.eq(customer.id.as_str()))
            .filter(customers::Column::DeletedAt.is_null())
            .exec(&txn)
            .await
            .map(|_| ());
        finish(txn, result).await
    }

    async fn delete_by_id(&self, id: &CustomerId) -> Result<(), DomainError> {
        let tombstone = customers::ActiveModel {
            deleted_at: Set(Some(Utc::now())),
            ..Default::default()
        };

        let txn = self.db.begin().await?;
        let result = customers::Entity::update_many()
            .set(tombstone)
            .filter(customers::Column::Id.eq(id.as_str()))
            .filter(customers::Column::DeletedAt.is_null())
            .exec(&txn)
            .await
            .map(|res| {
                tracing::debug!(customer_id = %id, rows = res.rows_affected, "Soft delete");
            });
        finish(txn, result).await
    }
}

/// Convert SeaORM model to domain entity
impl From<customers::Model> for Customer {
    fn from(model: customers::Model) -> Self {
        Customer {
            id: CustomerId(model.id),
            name: model.name,
            age: model.age,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
