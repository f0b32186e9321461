use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::{NewRestaurant, Restaurant};
use crate::storage::{connection::DbConnection, traits::RestaurantStorage};

/// Repository for restaurant operations
#[derive(Clone)]
pub struct RestaurantRepository {
    db: DbConnection,
}

impl RestaurantRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Restaurant {
        Restaurant {
            id: row.get("id"),
            name: row.get("name"),
            address: row.get("address"),
        }
    }
}

#[async_trait]
impl RestaurantStorage for RestaurantRepository {
    async fn store_restaurant(&self, restaurant: &NewRestaurant) -> Result<Restaurant> {
        let result = sqlx::query("INSERT INTO restaurants (name, address) VALUES (?, ?)")
            .bind(&restaurant.name)
            .bind(&restaurant.address)
            .execute(self.db.pool())
            .await?;

        Ok(Restaurant {
            id: result.last_insert_rowid(),
            name: restaurant.name.clone(),
            address: restaurant.address.clone(),
        })
    }

    async fn get_restaurant(&self, restaurant_id: i64) -> Result<Option<Restaurant>> {
        let row = sqlx::query("SELECT id, name, address FROM restaurants WHERE id = ?")
            .bind(restaurant_id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>> {
        let rows = sqlx::query("SELECT id, name, address FROM restaurants ORDER BY id")
            .fetch_all(self.db.pool())
            .await?;

        Ok(rows.iter().map(Self::from_row).collect())
    }

    async fn delete_restaurant(&self, restaurant_id: i64) -> Result<Option<u64>> {
        let mut tx = self.db.pool().begin().await?;

        let associations = sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = ?")
            .bind(restaurant_id)
            .execute(&mut *tx)
            .await?;

        let restaurants = sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(restaurant_id)
            .execute(&mut *tx)
            .await?;

        if restaurants.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        Ok(Some(associations.rows_affected()))
    }
}
