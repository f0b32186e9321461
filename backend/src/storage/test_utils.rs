//! Shared fixtures for tests that need a populated store.

use anyhow::Result;
use std::sync::Arc;

use super::connection::DbConnection;
use super::repositories::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use super::traits::{PizzaStorage, RestaurantPizzaStorage, RestaurantStorage};
use crate::domain::models::{NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant};

/// A fresh in-memory store plus one repository per table
pub struct TestEnvironment {
    pub connection: DbConnection,
    pub restaurants: Arc<RestaurantRepository>,
    pub pizzas: Arc<PizzaRepository>,
    pub restaurant_pizzas: Arc<RestaurantPizzaRepository>,
}

/// Rows inserted by [`TestEnvironment::with_sample_data`]
pub struct SampleData {
    /// Karen's Pizza, 123 Main St; owns two associations
    pub karens: Restaurant,
    /// Sanjay's Pizza, 456 Elm St; owns none
    pub sanjays: Restaurant,
    /// Cheese, "Dough, Cheese"
    pub cheese: Pizza,
    /// Pepperoni, "Dough, Tomato Sauce, Cheese, Pepperoni"
    pub pepperoni: Pizza,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        let connection = DbConnection::in_memory().await?;

        Ok(Self {
            restaurants: Arc::new(RestaurantRepository::new(connection.clone())),
            pizzas: Arc::new(PizzaRepository::new(connection.clone())),
            restaurant_pizzas: Arc::new(RestaurantPizzaRepository::new(connection.clone())),
            connection,
        })
    }

    pub async fn with_sample_data() -> Result<(Self, SampleData)> {
        let env = Self::new().await?;

        let karens = env.add_restaurant("Karen's Pizza", "123 Main St").await?;
        let sanjays = env.add_restaurant("Sanjay's Pizza", "456 Elm St").await?;
        let cheese = env.add_pizza("Cheese", "Dough, Cheese").await?;
        let pepperoni = env
            .add_pizza("Pepperoni", "Dough, Tomato Sauce, Cheese, Pepperoni")
            .await?;

        env.add_restaurant_pizza(10.0, cheese.id, karens.id).await?;
        env.add_restaurant_pizza(15.0, pepperoni.id, karens.id).await?;

        Ok((
            env,
            SampleData {
                karens,
                sanjays,
                cheese,
                pepperoni,
            },
        ))
    }

    pub async fn add_restaurant(&self, name: &str, address: &str) -> Result<Restaurant> {
        self.restaurants
            .store_restaurant(&NewRestaurant {
                name: name.to_string(),
                address: address.to_string(),
            })
            .await
    }

    pub async fn add_pizza(&self, name: &str, ingredients: &str) -> Result<Pizza> {
        self.pizzas
            .store_pizza(&NewPizza {
                name: name.to_string(),
                ingredients: ingredients.to_string(),
            })
            .await
    }

    pub async fn add_restaurant_pizza(&self, price: f64, pizza_id: i64, restaurant_id: i64) -> Result<()> {
        self.restaurant_pizzas
            .create_restaurant_pizza(&NewRestaurantPizza {
                price,
                pizza_id,
                restaurant_id,
            })
            .await?
            .ok_or_else(|| anyhow::anyhow!("pizza {} or restaurant {} does not exist", pizza_id, restaurant_id))?;
        Ok(())
    }

    pub async fn association_count(&self) -> i64 {
        self.restaurant_pizzas
            .count_restaurant_pizzas()
            .await
            .expect("Failed to count associations")
    }
}
