//! Customer API Server
//!
//! CRUD over customer records backed by a relational store.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use sea_orm::Database;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{init_schema, SqlCustomerRepository};
use app::CustomerService;
use config::Config;
use domain::entities::NewCustomer;
use domain::ports::CustomerUsecase;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<dyn CustomerUsecase>,
}

/// Build the HTTP router with CORS and request tracing
pub fn build_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/customers", post(handlers::create_customer))
        .route(
            "/customers/:id",
            get(handlers::get_customer)
                .put(handlers::update_customer)
                .delete(handlers::delete_customer),
        )
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins = if config.cors_allows_any() {
        AllowOrigin::mirror_request()
    } else {
        let allowed: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(allowed)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(86400))
}

/// Create the demo customers; failures are logged and skipped
async fn seed_customers(customers: &dyn CustomerUsecase) {
    let seeds = [("John Doe", 23), ("Jane Smith", 44)];

    for (name, age) in seeds {
        let customer = NewCustomer {
            name: name.to_string(),
            age,
        };
        if let Err(e) = customers.create_customer(customer).await {
            tracing::warn!(error = %e, name, "Failed to seed customer");
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,customer_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Customer API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to the database
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    init_schema(&db)
        .await
        .context("Failed to create customer schema")?;
    tracing::info!("Database connected");

    // Wire repository -> service -> state
    let customer_repo = Arc::new(SqlCustomerRepository::new(db));
    let customer_service = Arc::new(CustomerService::new(customer_repo));

    if config.seed_customers {
        seed_customers(customer_service.as_ref()).await;
    }

    let state = AppState {
        customers: customer_service,
    };
    let app = build_router(state, &config);

    let addr = config.socket_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
