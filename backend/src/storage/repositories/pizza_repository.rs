use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::{NewPizza, Pizza};
use crate::storage::{connection::DbConnection, traits::PizzaStorage};

/// Repository for pizza operations
#[derive(Clone)]
pub struct PizzaRepository {
    db: DbConnection,
}

impl PizzaRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Pizza {
        Pizza {
            id: row.get("id"),
            name: row.get("name"),
            ingredients: row.get("ingredients"),
        }
    }
}

#[async_trait]
impl PizzaStorage for PizzaRepository {
    async fn store_pizza(&self, pizza: &NewPizza) -> Result<Pizza> {
        let result = sqlx::query("INSERT INTO pizzas (name, ingredients) VALUES (?, ?)")
            .bind(&pizza.name)
            .bind(&pizza.ingredients)
            .execute(self.db.pool())
            .await?;

        Ok(Pizza {
            id: result.last_insert_rowid(),
            name: pizza.name.clone(),
            ingredients: pizza.ingredients.clone(),
        })
    }

    async fn get_pizza(&self, pizza_id: i64) -> Result<Option<Pizza>> {
        let row = sqlx::query("SELECT id, name, ingredients FROM pizzas WHERE id = ?")
            .bind(pizza_id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    async fn list_pizzas(&self) -> Result<Vec<Pizza>> {
        let rows = sqlx::query("SELECT id, name, ingredients FROM pizzas ORDER BY id")
            .fetch_all(self.db.pool())
            .await?;

        Ok(rows.iter().map(Self::from_row).collect())
    }
}
