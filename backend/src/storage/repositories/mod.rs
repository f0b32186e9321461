// Repository modules
pub mod pizza_repository;
pub mod restaurant_pizza_repository;
pub mod restaurant_repository;

// Re-export repository types
pub use pizza_repository::PizzaRepository;
pub use restaurant_pizza_repository::RestaurantPizzaRepository;
pub use restaurant_repository::RestaurantRepository;
