use std::sync::Arc;
use tracing::{info, warn};

use super::commands::restaurant_pizza::CreateRestaurantPizzaCommand;
use super::errors::{DomainError, DomainResult};
use super::models::restaurant_pizza::{parse_id, require_fields, validate_price};
use super::models::{NewRestaurantPizza, RestaurantPizzaDetails, RestaurantPizzaValidationError};
use crate::storage::{PizzaStorage, RestaurantPizzaStorage, RestaurantStorage};

/// Service for creating restaurant/pizza associations
#[derive(Clone)]
pub struct RestaurantPizzaService {
    restaurants: Arc<dyn RestaurantStorage>,
    pizzas: Arc<dyn PizzaStorage>,
    restaurant_pizzas: Arc<dyn RestaurantPizzaStorage>,
}

impl RestaurantPizzaService {
    pub fn new(
        restaurants: Arc<dyn RestaurantStorage>,
        pizzas: Arc<dyn PizzaStorage>,
        restaurant_pizzas: Arc<dyn RestaurantPizzaStorage>,
    ) -> Self {
        Self {
            restaurants,
            pizzas,
            restaurant_pizzas,
        }
    }

    /// Validate and store a new association.
    ///
    /// Checks run in a fixed order (presence, references, price) and the first
    /// failure is returned without anything being written. The final existence
    /// check and the insert share one transaction, so a pizza or restaurant
    /// removed in between is still reported as an invalid reference.
    pub async fn create_restaurant_pizza(
        &self,
        command: CreateRestaurantPizzaCommand,
    ) -> DomainResult<RestaurantPizzaDetails> {
        info!("Creating restaurant pizza: {:?}", command);

        let [price, pizza_id, restaurant_id] = require_fields([
            ("price", command.price),
            ("pizza_id", command.pizza_id),
            ("restaurant_id", command.restaurant_id),
        ])?;

        let (Some(pizza_id), Some(restaurant_id)) = (parse_id(&pizza_id), parse_id(&restaurant_id)) else {
            warn!(
                "Rejecting restaurant pizza: pizza_id={} restaurant_id={} are not ids",
                pizza_id, restaurant_id
            );
            return Err(RestaurantPizzaValidationError::InvalidReference.into());
        };

        let price = match validate_price(&price) {
            Ok(price) => price,
            Err(price_error) => {
                // A bad reference is reported ahead of a bad price
                if !self.references_exist(pizza_id, restaurant_id).await? {
                    return Err(self.invalid_reference(pizza_id, restaurant_id));
                }
                return Err(price_error.into());
            }
        };

        let created = self
            .restaurant_pizzas
            .create_restaurant_pizza(&NewRestaurantPizza {
                price,
                pizza_id,
                restaurant_id,
            })
            .await?;
        let Some(details) = created else {
            return Err(self.invalid_reference(pizza_id, restaurant_id));
        };

        info!(
            "Created restaurant pizza {} ({} at {} for {})",
            details.restaurant_pizza.id, details.pizza.name, details.restaurant.name, details.restaurant_pizza.price
        );

        Ok(details)
    }

    async fn references_exist(&self, pizza_id: i64, restaurant_id: i64) -> DomainResult<bool> {
        let pizza = self.pizzas.get_pizza(pizza_id).await?;
        let restaurant = self.restaurants.get_restaurant(restaurant_id).await?;
        Ok(pizza.is_some() && restaurant.is_some())
    }

    fn invalid_reference(&self, pizza_id: i64, restaurant_id: i64) -> DomainError {
        warn!(
            "Rejecting restaurant pizza: pizza {} or restaurant {} does not exist",
            pizza_id, restaurant_id
        );
        RestaurantPizzaValidationError::InvalidReference.into()
    }
}
