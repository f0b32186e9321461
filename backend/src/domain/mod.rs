//! # Domain Module
//!
//! Business rules for restaurants, pizzas and their priced associations.
//!
//! ## Module Organization
//!
//! - **models**: plain entity structs and the association validation rules
//! - **commands**: input types the REST layer maps request bodies onto
//! - **errors**: the error type every service returns
//! - **restaurant_service / pizza_service / restaurant_pizza_service**: one
//!   service per resource, each holding the storage traits it needs
//!
//! ## Business Rules
//!
//! - An association needs a price, a pizza id and a restaurant id
//! - Both ids must reference stored rows
//! - The price is a number between 1 and 30 inclusive
//! - Deleting a restaurant deletes its associations first, atomically

pub mod commands;
pub mod errors;
pub mod models;
pub mod pizza_service;
pub mod restaurant_pizza_service;
pub mod restaurant_service;

pub use errors::{DomainError, DomainResult};
pub use pizza_service::PizzaService;
pub use restaurant_pizza_service::RestaurantPizzaService;
pub use restaurant_service::RestaurantService;
