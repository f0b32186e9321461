//! Reset the configured database to a small demo data set.

use anyhow::Context;
use tracing::info;

use pizza_restaurant_backend::{
    config::AppConfig,
    domain::models::{NewPizza, NewRestaurant, NewRestaurantPizza},
    storage::{
        DbConnection, PizzaRepository, PizzaStorage, RestaurantPizzaRepository, RestaurantPizzaStorage,
        RestaurantRepository, RestaurantStorage,
    },
};

const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "123 Main St"),
    ("Sanjay's Pizza", "456 Elm St"),
    ("Kiki's Pizza", "789 Oak Ave"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (price, pizza index, restaurant index)
const MENU: [(f64, usize, usize); 5] = [(1.0, 0, 0), (4.5, 1, 0), (5.0, 2, 1), (12.0, 0, 2), (30.0, 2, 2)];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let db = DbConnection::new(&config.database_url)
        .await
        .with_context(|| format!("Failed to open {}", config.database_url))?;

    info!("Deleting existing data");
    db.clear_all().await?;

    let restaurant_repo = RestaurantRepository::new(db.clone());
    let pizza_repo = PizzaRepository::new(db.clone());
    let restaurant_pizza_repo = RestaurantPizzaRepository::new(db);

    info!("Creating restaurants");
    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        let restaurant = restaurant_repo
            .store_restaurant(&NewRestaurant {
                name: name.to_string(),
                address: address.to_string(),
            })
            .await?;
        info!("  {} {}", restaurant.id, restaurant.name);
        restaurants.push(restaurant);
    }

    info!("Creating pizzas");
    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        let pizza = pizza_repo
            .store_pizza(&NewPizza {
                name: name.to_string(),
                ingredients: ingredients.to_string(),
            })
            .await?;
        info!("  {} {}", pizza.id, pizza.name);
        pizzas.push(pizza);
    }

    info!("Creating restaurant pizzas");
    for (price, pizza, restaurant) in MENU {
        let (pizza, restaurant) = (&pizzas[pizza], &restaurants[restaurant]);
        restaurant_pizza_repo
            .create_restaurant_pizza(&NewRestaurantPizza {
                price,
                pizza_id: pizza.id,
                restaurant_id: restaurant.id,
            })
            .await?
            .with_context(|| format!("{} or {} disappeared while seeding", pizza.name, restaurant.name))?;
        info!("  {} at {} for {}", pizza.name, restaurant.name, price);
    }

    info!("Seeding done");
    Ok(())
}
