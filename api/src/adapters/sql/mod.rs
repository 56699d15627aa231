//! SQL adapters
//!
//! Implementations of repository traits using SeaORM. The same code runs on
//! PostgreSQL and SQLite; the backend is picked from the connection URL.

pub mod customer_repo;
pub mod schema;

pub use customer_repo::SqlCustomerRepository;
pub use schema::init_schema;
