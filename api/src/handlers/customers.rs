//! Customer handlers
//!
//! CRUD endpoints for customers. Bodies are parsed and validated here,
//! everything else is delegated to the customer use case.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::entities::{Customer, CustomerId, CustomerUpdate, NewCustomer};
use crate::error::AppError;
use crate::handlers::validation::parse_and_validate;
use crate::AppState;

const NAME_MAX_CHARS: usize = 100;
const AGE_MIN: i64 = 1;
const AGE_MAX: i64 = 110;

/// Request body for creating a customer
///
/// Missing fields decode to their zero value and are then reported as
/// `required` by validation.
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i64,
}

impl Validate for CreateCustomerRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.is_empty() {
            errors.add("name", ValidationError::new("required"));
        } else if let Err(e) = check_name(&self.name) {
            errors.add("name", e);
        }

        if self.age == 0 {
            errors.add("age", ValidationError::new("required"));
        } else if let Err(e) = check_age(self.age) {
            errors.add("age", e);
        }

        into_result(errors)
    }
}

/// Request body for updating a customer; absent fields are left as stored
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl Validate for UpdateCustomerRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(Err(e)) = self.name.as_deref().map(check_name) {
            errors.add("name", e);
        }
        if let Some(Err(e)) = self.age.map(check_age) {
            errors.add("age", e);
        }

        into_result(errors)
    }
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(ValidationError::new("max"));
    }
    Ok(())
}

fn check_age(age: i64) -> Result<(), ValidationError> {
    if age < AGE_MIN {
        return Err(ValidationError::new("min"));
    }
    if age > AGE_MAX {
        return Err(ValidationError::new("max"));
    }
    Ok(())
}

fn into_result(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Response body for a successful create
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCustomerResponse {
    #[serde(rename = "Message")]
    pub message: String,
}

/// Customer as returned by GET /customers/:id
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerResponse {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        CustomerResponse {
            id: customer.id.0,
            name: customer.name,
            age: customer.age,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}

/// POST /customers
///
/// Create a customer. The identifier is generated server-side.
pub async fn create_customer(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateCustomerResponse>), AppError> {
    let request: CreateCustomerRequest = parse_and_validate(&body)?;

    // Range checked by validation
    let customer = NewCustomer {
        name: request.name,
        age: request.age as i32,
    };
    state.customers.create_customer(customer).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateCustomerResponse {
            message: "create customer successful".to_string(),
        }),
    ))
}

/// GET /customers/:id
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = state
        .customers
        .get_customer_by_id(&CustomerId(id))
        .await?;

    Ok(Json(customer.into()))
}

/// PUT /customers/:id
///
/// Overwrite name and/or age. Responds 200 with an empty body.
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let request: UpdateCustomerRequest = parse_and_validate(&body)?;

    let update = CustomerUpdate {
        name: request.name,
        age: request.age.map(|age| age as i32),
    };
    state
        .customers
        .update_customer_by_id(&update, &CustomerId(id))
        .await?;

    Ok(StatusCode::OK)
}

/// DELETE /customers/:id
///
/// Soft delete. Responds 200 with an empty body.
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.customers.del_customer_by_id(&CustomerId(id)).await?;

    Ok(StatusCode::OK)
}
