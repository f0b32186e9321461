//! # Pizza Restaurant Backend
//!
//! REST API over restaurants, pizzas and the prices restaurants charge for them.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (Business logic, services)
//!     ↓
//! Storage Layer (SQLite repositories)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Initialize the store and the services built on it
//! - Assemble the router with tracing and panic recovery
//! - Keep each layer ignorant of the one above it

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{PizzaService, RestaurantPizzaService, RestaurantService};
use crate::io::rest::{pizza_apis, restaurant_apis, restaurant_pizza_apis, root_apis};
use crate::storage::{DbConnection, PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub restaurant_service: RestaurantService,
    pub pizza_service: PizzaService,
    pub restaurant_pizza_service: RestaurantPizzaService,
}

impl AppState {
    /// Wire every service to repositories sharing `db`
    pub fn new(db: DbConnection) -> Self {
        let restaurants = Arc::new(RestaurantRepository::new(db.clone()));
        let pizzas = Arc::new(PizzaRepository::new(db.clone()));
        let restaurant_pizzas = Arc::new(RestaurantPizzaRepository::new(db));

        Self {
            restaurant_service: RestaurantService::new(restaurants.clone(), restaurant_pizzas.clone()),
            pizza_service: PizzaService::new(pizzas.clone()),
            restaurant_pizza_service: RestaurantPizzaService::new(restaurants, pizzas, restaurant_pizzas),
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db_conn = DbConnection::new(&config.database_url).await?;

    info!("Setting up application state");
    Ok(AppState::new(db_conn))
}

/// Create the Axum router with all routes configured.
///
/// CORS is left to the caller since it depends on deployment settings.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root_apis::index))
        .merge(restaurant_apis::router())
        .merge(pizza_apis::router())
        .merge(restaurant_pizza_apis::router())
        .method_not_allowed_fallback(root_apis::method_not_allowed)
        .fallback(root_apis::not_found)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(root_apis::handle_panic))
}
