pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use pizza::{NewPizza, Pizza};
pub use restaurant::{NewRestaurant, Restaurant, RestaurantDetails};
pub use restaurant_pizza::{
    NewRestaurantPizza, RestaurantPizza, RestaurantPizzaDetails, RestaurantPizzaValidationError,
    RestaurantPizzaWithPizza,
};
