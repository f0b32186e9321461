use std::sync::Arc;
use tracing::{info, warn};

use super::errors::{DomainError, DomainResult};
use super::models::{Restaurant, RestaurantDetails};
use crate::storage::{RestaurantPizzaStorage, RestaurantStorage};

/// Service for reading and deleting restaurants
#[derive(Clone)]
pub struct RestaurantService {
    restaurants: Arc<dyn RestaurantStorage>,
    restaurant_pizzas: Arc<dyn RestaurantPizzaStorage>,
}

impl RestaurantService {
    pub fn new(
        restaurants: Arc<dyn RestaurantStorage>,
        restaurant_pizzas: Arc<dyn RestaurantPizzaStorage>,
    ) -> Self {
        Self {
            restaurants,
            restaurant_pizzas,
        }
    }

    /// List every restaurant
    pub async fn list_restaurants(&self) -> DomainResult<Vec<Restaurant>> {
        let restaurants = self.restaurants.list_restaurants().await?;
        info!("Found {} restaurants", restaurants.len());
        Ok(restaurants)
    }

    /// Get a restaurant together with its associations and their pizzas
    pub async fn get_restaurant(&self, restaurant_id: i64) -> DomainResult<RestaurantDetails> {
        info!("Getting restaurant: {}", restaurant_id);

        let Some(restaurant) = self.restaurants.get_restaurant(restaurant_id).await? else {
            warn!("Restaurant not found: {}", restaurant_id);
            return Err(DomainError::NotFound("Restaurant"));
        };

        let restaurant_pizzas = self.restaurant_pizzas.list_for_restaurant(restaurant_id).await?;

        Ok(RestaurantDetails {
            restaurant,
            restaurant_pizzas,
        })
    }

    /// Delete a restaurant along with every association it owns
    pub async fn delete_restaurant(&self, restaurant_id: i64) -> DomainResult<()> {
        info!("Deleting restaurant: {}", restaurant_id);

        match self.restaurants.delete_restaurant(restaurant_id).await? {
            Some(associations) => {
                info!(
                    "Deleted restaurant {} and {} restaurant pizzas",
                    restaurant_id, associations
                );
                Ok(())
            }
            None => {
                warn!("Restaurant not found: {}", restaurant_id);
                Err(DomainError::NotFound("Restaurant"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::{SampleData, TestEnvironment};

    async fn setup_test() -> (TestEnvironment, SampleData, RestaurantService) {
        let (env, sample) = TestEnvironment::with_sample_data()
            .await
            .expect("Failed to create test environment");
        let service = RestaurantService::new(env.restaurants.clone(), env.restaurant_pizzas.clone());
        (env, sample, service)
    }

    #[tokio::test]
    async fn test_list_restaurants() {
        let (_env, sample, service) = setup_test().await;

        let restaurants = service.list_restaurants().await.unwrap();
        assert_eq!(restaurants, vec![sample.karens, sample.sanjays]);
    }

    #[tokio::test]
    async fn test_get_restaurant_embeds_associations_with_pizzas() {
        let (_env, sample, service) = setup_test().await;

        let details = service.get_restaurant(sample.karens.id).await.unwrap();
        assert_eq!(details.restaurant, sample.karens);
        assert_eq!(details.restaurant_pizzas.len(), 2);

        let first = &details.restaurant_pizzas[0];
        assert_eq!(first.restaurant_pizza.price, 10.0);
        assert_eq!(first.pizza.as_ref(), Some(&sample.cheese));

        let second = &details.restaurant_pizzas[1];
        assert_eq!(second.restaurant_pizza.price, 15.0);
        assert_eq!(second.pizza.as_ref(), Some(&sample.pepperoni));
    }

    #[tokio::test]
    async fn test_get_restaurant_without_associations() {
        let (_env, sample, service) = setup_test().await;

        let details = service.get_restaurant(sample.sanjays.id).await.unwrap();
        assert!(details.restaurant_pizzas.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_restaurant() {
        let (_env, _sample, service) = setup_test().await;

        let result = service.get_restaurant(404).await;
        assert!(matches!(result, Err(DomainError::NotFound("Restaurant"))));
    }

    #[tokio::test]
    async fn test_delete_restaurant_then_get_is_not_found() {
        let (env, sample, service) = setup_test().await;
        assert_eq!(env.association_count().await, 2);

        service.delete_restaurant(sample.karens.id).await.expect("Failed to delete");

        assert_eq!(env.association_count().await, 0);
        assert!(matches!(
            service.get_restaurant(sample.karens.id).await,
            Err(DomainError::NotFound(_))
        ));
        assert_eq!(service.list_restaurants().await.unwrap(), vec![sample.sanjays]);
    }

    #[tokio::test]
    async fn test_delete_missing_restaurant_leaves_store_unchanged() {
        let (env, _sample, service) = setup_test().await;

        let result = service.delete_restaurant(404).await;
        assert!(matches!(result, Err(DomainError::NotFound("Restaurant"))));
        assert_eq!(env.association_count().await, 2);
        assert_eq!(service.list_restaurants().await.unwrap().len(), 2);
    }
}
