use serde::{Deserialize, Serialize, Serializer};

/// Prices are real numbers; whole ones are written without a fractional part
/// (`12`, not `12.0`).
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    if price.fract() == 0.0 && price.abs() <= MAX_EXACT {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

/// Summary shape of a restaurant: `{id, name, address}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

/// Summary shape of a pizza: `{id, name, ingredients}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    /// Free-form, comma separated ingredient names
    pub ingredients: String,
}

/// Summary shape of a restaurant/pizza association: `{id, price, pizza_id, restaurant_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantPizza {
    pub id: i64,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

/// An association merged with the pizza it points at.
///
/// Used for the `restaurant_pizzas` list of a restaurant detail. The `pizza`
/// key is left out entirely when the pizza row could not be loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantPizzaWithPizza {
    #[serde(flatten)]
    pub restaurant_pizza: RestaurantPizza,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pizza: Option<Pizza>,
}

/// Response body for GET /restaurants/{id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub restaurant_pizzas: Vec<RestaurantPizzaWithPizza>,
}

/// Response body for POST /restaurant_pizzas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantPizzaDetail {
    #[serde(flatten)]
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
    pub restaurant: Restaurant,
}

/// Request body for POST /restaurant_pizzas, as sent by well-behaved clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRestaurantPizzaRequest {
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

/// Body of 404 and 500 responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of 400 responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}
