use anyhow::Result;
use sqlx::{
    migrate::MigrateDatabase,
    sqlite::SqlitePoolOptions,
    Sqlite, SqlitePool,
};
use std::sync::Arc;

/// DbConnection owns the SQLite pool shared by all repositories
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Connect to the database at `url`, creating it and its schema if missing
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        let pool = SqlitePool::connect(url).await?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Open a private in-memory database.
    ///
    /// The pool holds exactly one connection that is never recycled, since an
    /// in-memory SQLite database lives only as long as its connection.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Delete every row and restart id numbering, atomically.
    /// Associations go first so no foreign key is ever left dangling.
    pub async fn clear_all(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for statement in [
            "DELETE FROM restaurant_pizzas",
            "DELETE FROM restaurants",
            "DELETE FROM pizzas",
            "DELETE FROM sqlite_sequence WHERE name IN ('restaurant_pizzas', 'restaurants', 'pizzas')",
        ] {
            sqlx::query(statement).execute(&mut *tx).await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS restaurants (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                address TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS pizzas (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                ingredients TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Rows are removed by the application before their restaurant, so no cascade
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS restaurant_pizzas (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                price REAL NOT NULL CHECK (price >= 1 AND price <= 30),
                pizza_id INTEGER NOT NULL,
                restaurant_id INTEGER NOT NULL,
                FOREIGN KEY (pizza_id) REFERENCES pizzas (id),
                FOREIGN KEY (restaurant_id) REFERENCES restaurants (id)
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_restaurant_pizzas_restaurant_id
            ON restaurant_pizzas(restaurant_id);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}
