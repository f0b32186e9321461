//! Domain model → wire representation conversions.
//!
//! Each mapper builds one of the statically declared shapes in `shared`; none
//! of them touch the store.

pub mod pizza_mapper;
pub mod restaurant_mapper;
pub mod restaurant_pizza_mapper;

pub use pizza_mapper::PizzaMapper;
pub use restaurant_mapper::RestaurantMapper;
pub use restaurant_pizza_mapper::RestaurantPizzaMapper;
