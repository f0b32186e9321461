//! # REST API Interface Layer
//!
//! HTTP endpoints for restaurants, pizzas and restaurant pizzas.
//!
//! ## Key Responsibilities
//!
//! - **API Endpoints**: one `*_apis` module per resource, each exposing a `router()`
//! - **Serialization**: `mappers` build the field-limited `shared` shapes
//! - **Error Handling**: [`error::ApiError`] turns domain errors into 400/404/500
//!   JSON bodies; internal detail is logged, never returned
//! - **Fallbacks**: unmatched routes and handler panics get JSON bodies too

pub mod error;
pub mod mappers;
pub mod pizza_apis;
pub mod restaurant_apis;
pub mod restaurant_pizza_apis;
pub mod root_apis;

#[cfg(test)]
pub mod test_client;

pub use error::ApiError;
