use super::restaurant_pizza::RestaurantPizzaWithPizza;

#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

/// A restaurant that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

/// A restaurant together with every association it owns and the pizza of each
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantDetails {
    pub restaurant: Restaurant,
    pub restaurant_pizzas: Vec<RestaurantPizzaWithPizza>,
}
