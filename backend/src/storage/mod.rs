//! # Storage Module
//!
//! Relational persistence for restaurants, pizzas and the priced associations
//! between them.
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: SQLite through SQLx, one pool shared by every repository
//! - **Schema**: bootstrapped idempotently when the connection is opened
//! - **Tests**: a private in-memory database per test
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: one repository per table, implementing the traits in
//!   [`traits`] that the domain layer depends on
//! - **Plain Data**: repositories return domain models that hold no store handle
//! - **Transaction Safety**: multi-statement writes run inside one transaction

pub mod connection;
pub mod repositories;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

// Re-export the main types that other modules need
pub use connection::DbConnection;
pub use repositories::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
pub use traits::{PizzaStorage, RestaurantPizzaStorage, RestaurantStorage};
