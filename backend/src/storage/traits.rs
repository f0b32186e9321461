//! # Storage Traits
//!
//! The storage abstraction the domain services are written against. The SQLite
//! repositories are the production implementation.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::{
    NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizzaDetails,
    RestaurantPizzaWithPizza,
};

#[async_trait]
pub trait RestaurantStorage: Send + Sync {
    /// Store a new restaurant and return it with its assigned id
    async fn store_restaurant(&self, restaurant: &NewRestaurant) -> Result<Restaurant>;

    /// Retrieve a restaurant by id
    async fn get_restaurant(&self, restaurant_id: i64) -> Result<Option<Restaurant>>;

    /// List all restaurants in store order
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>>;

    /// Delete a restaurant and every association it owns in one transaction.
    ///
    /// Returns the number of associations removed, or `None` when no restaurant
    /// has that id (nothing is changed in that case).
    async fn delete_restaurant(&self, restaurant_id: i64) -> Result<Option<u64>>;
}

#[async_trait]
pub trait PizzaStorage: Send + Sync {
    /// Store a new pizza and return it with its assigned id
    async fn store_pizza(&self, pizza: &NewPizza) -> Result<Pizza>;

    /// Retrieve a pizza by id
    async fn get_pizza(&self, pizza_id: i64) -> Result<Option<Pizza>>;

    /// List all pizzas in store order
    async fn list_pizzas(&self) -> Result<Vec<Pizza>>;
}

#[async_trait]
pub trait RestaurantPizzaStorage: Send + Sync {
    /// Store a validated association together with the pizza and restaurant it
    /// links, all read in the same transaction as the insert.
    ///
    /// Returns `None` without writing when either referenced row is missing.
    async fn create_restaurant_pizza(
        &self,
        restaurant_pizza: &NewRestaurantPizza,
    ) -> Result<Option<RestaurantPizzaDetails>>;

    /// All associations of one restaurant joined with their pizzas, ordered by id
    async fn list_for_restaurant(&self, restaurant_id: i64) -> Result<Vec<RestaurantPizzaWithPizza>>;

    /// Total number of stored associations
    async fn count_restaurant_pizzas(&self) -> Result<i64>;
}
