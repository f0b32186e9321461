use anyhow::Result;
use async_trait::async_trait;
use sqlx::Row;

use crate::domain::models::{
    NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza, RestaurantPizzaDetails, RestaurantPizzaWithPizza,
};
use crate::storage::{connection::DbConnection, traits::RestaurantPizzaStorage};

/// Repository for restaurant/pizza associations
#[derive(Clone)]
pub struct RestaurantPizzaRepository {
    db: DbConnection,
}

impl RestaurantPizzaRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestaurantPizzaStorage for RestaurantPizzaRepository {
    async fn create_restaurant_pizza(
        &self,
        restaurant_pizza: &NewRestaurantPizza,
    ) -> Result<Option<RestaurantPizzaDetails>> {
        let mut tx = self.db.pool().begin().await?;

        let pizza = sqlx::query("SELECT id, name, ingredients FROM pizzas WHERE id = ?")
            .bind(restaurant_pizza.pizza_id)
            .fetch_optional(&mut *tx)
            .await?;
        let restaurant = sqlx::query("SELECT id, name, address FROM restaurants WHERE id = ?")
            .bind(restaurant_pizza.restaurant_id)
            .fetch_optional(&mut *tx)
            .await?;

        let (Some(pizza), Some(restaurant)) = (pizza, restaurant) else {
            tx.rollback().await?;
            return Ok(None);
        };

        let result = sqlx::query(
            r#"
            INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(restaurant_pizza.price)
        .bind(restaurant_pizza.pizza_id)
        .bind(restaurant_pizza.restaurant_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(RestaurantPizzaDetails {
            restaurant_pizza: RestaurantPizza {
                id: result.last_insert_rowid(),
                price: restaurant_pizza.price,
                pizza_id: restaurant_pizza.pizza_id,
                restaurant_id: restaurant_pizza.restaurant_id,
            },
            pizza: Pizza {
                id: pizza.get("id"),
                name: pizza.get("name"),
                ingredients: pizza.get("ingredients"),
            },
            restaurant: Restaurant {
                id: restaurant.get("id"),
                name: restaurant.get("name"),
                address: restaurant.get("address"),
            },
        }))
    }

    async fn list_for_restaurant(&self, restaurant_id: i64) -> Result<Vec<RestaurantPizzaWithPizza>> {
        let rows = sqlx::query(
            r#"
            SELECT rp.id, rp.price, rp.pizza_id, rp.restaurant_id,
                   p.id AS pizza_row_id, p.name AS pizza_name, p.ingredients AS pizza_ingredients
            FROM restaurant_pizzas rp
            LEFT JOIN pizzas p ON p.id = rp.pizza_id
            WHERE rp.restaurant_id = ?
            ORDER BY rp.id
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(self.db.pool())
        .await?;

        let entries = rows
            .iter()
            .map(|row| {
                let pizza = row
                    .get::<Option<i64>, _>("pizza_row_id")
                    .map(|id| Pizza {
                        id,
                        name: row.get("pizza_name"),
                        ingredients: row.get("pizza_ingredients"),
                    });

                RestaurantPizzaWithPizza {
                    restaurant_pizza: RestaurantPizza {
                        id: row.get("id"),
                        price: row.get("price"),
                        pizza_id: row.get("pizza_id"),
                        restaurant_id: row.get("restaurant_id"),
                    },
                    pizza,
                }
            })
            .collect();

        Ok(entries)
    }

    async fn count_restaurant_pizzas(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM restaurant_pizzas")
            .fetch_one(self.db.pool())
            .await?;
        Ok(row.get("count"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{NewPizza, NewRestaurant};
    use crate::storage::repositories::{PizzaRepository, RestaurantRepository};
    use crate::storage::traits::{PizzaStorage, RestaurantStorage};

    struct Fixture {
        repo: RestaurantPizzaRepository,
        restaurants: RestaurantRepository,
        restaurant_id: i64,
        pizza_ids: Vec<i64>,
    }

    async fn setup_test() -> Fixture {
        let db = DbConnection::in_memory().await.expect("Failed to create test database");
        let restaurants = RestaurantRepository::new(db.clone());
        let restaurant = restaurants
            .store_restaurant(&NewRestaurant {
                name: "Karen's Pizza".to_string(),
                address: "123 Main St".to_string(),
            })
            .await
            .unwrap();

        let pizzas = PizzaRepository::new(db.clone());
        let mut pizza_ids = Vec::new();
        for (name, ingredients) in [("Cheese", "Dough, Cheese"), ("Veggie", "Dough, Peppers")] {
            let pizza = pizzas
                .store_pizza(&NewPizza {
                    name: name.to_string(),
                    ingredients: ingredients.to_string(),
                })
                .await
                .unwrap();
            pizza_ids.push(pizza.id);
        }

        Fixture {
            repo: RestaurantPizzaRepository::new(db),
            restaurants,
            restaurant_id: restaurant.id,
            pizza_ids,
        }
    }

    fn new_restaurant_pizza(price: f64, pizza_id: i64, restaurant_id: i64) -> NewRestaurantPizza {
        NewRestaurantPizza {
            price,
            pizza_id,
            restaurant_id,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_joined_with_pizza() {
        let fixture = setup_test().await;

        let first = fixture
            .repo
            .create_restaurant_pizza(&new_restaurant_pizza(12.5, fixture.pizza_ids[1], fixture.restaurant_id))
            .await
            .expect("Failed to store association")
            .expect("Both references exist");
        let second = fixture
            .repo
            .create_restaurant_pizza(&new_restaurant_pizza(9.0, fixture.pizza_ids[0], fixture.restaurant_id))
            .await
            .expect("Failed to store association")
            .expect("Both references exist");

        assert_eq!(first.pizza.name, "Veggie");
        assert_eq!(first.restaurant.name, "Karen's Pizza");
        assert_eq!(first.restaurant_pizza.price, 12.5);

        let entries = fixture.repo.list_for_restaurant(fixture.restaurant_id).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].restaurant_pizza, first.restaurant_pizza);
        assert_eq!(entries[0].pizza.as_ref().map(|p| p.name.as_str()), Some("Veggie"));
        assert_eq!(entries[1].restaurant_pizza, second.restaurant_pizza);
        assert_eq!(entries[1].pizza.as_ref().map(|p| p.ingredients.as_str()), Some("Dough, Cheese"));
        assert_eq!(fixture.repo.count_restaurant_pizzas().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_missing_pizza_writes_nothing() {
        let fixture = setup_test().await;

        let created = fixture
            .repo
            .create_restaurant_pizza(&new_restaurant_pizza(10.0, 999, fixture.restaurant_id))
            .await
            .expect("A missing reference is not a storage failure");

        assert!(created.is_none());
        assert_eq!(fixture.repo.count_restaurant_pizzas().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_deleted_restaurant_is_reported_missing() {
        let fixture = setup_test().await;
        fixture
            .restaurants
            .delete_restaurant(fixture.restaurant_id)
            .await
            .unwrap();

        let created = fixture
            .repo
            .create_restaurant_pizza(&new_restaurant_pizza(10.0, fixture.pizza_ids[0], fixture.restaurant_id))
            .await
            .expect("A deleted restaurant is not a storage failure");

        assert!(created.is_none());
        assert_eq!(fixture.repo.count_restaurant_pizzas().await.unwrap(), 0);
    }
}
