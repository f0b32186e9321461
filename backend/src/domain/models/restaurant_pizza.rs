use serde_json::Value;

use super::{pizza::Pizza, restaurant::Restaurant};

pub const MIN_PRICE: f64 = 1.0;
pub const MAX_PRICE: f64 = 30.0;

/// The priced link between one restaurant and one pizza
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: f64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

/// An association that passed validation and is ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurantPizza {
    pub price: f64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

/// An association joined with its pizza. `pizza` is `None` only if the pizza
/// row is gone, which the foreign key normally prevents.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPizzaWithPizza {
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Option<Pizza>,
}

/// A freshly created association with both sides loaded
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPizzaDetails {
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
    pub restaurant: Restaurant,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RestaurantPizzaValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Invalid pizza_id or restaurant_id")]
    InvalidReference,
    #[error("Price must be a number")]
    PriceNotNumeric,
    #[error("Price must be between 1 and 30")]
    PriceOutOfRange,
}

/// Absent, `null` and `""` all count as not provided.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Check that every named field carries a value and hand the values back.
///
/// The error lists the omitted fields in the order given.
pub fn require_fields<const N: usize>(
    fields: [(&'static str, Option<Value>); N],
) -> Result<[Value; N], RestaurantPizzaValidationError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| is_blank(value.as_ref()))
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        return Err(RestaurantPizzaValidationError::MissingFields(missing));
    }

    Ok(fields.map(|(_, value)| value.unwrap_or(Value::Null)))
}

/// Interpret a raw value as a row id. Anything but an integer yields `None`.
pub fn parse_id(value: &Value) -> Option<i64> {
    value.as_i64()
}

/// Validate a raw price: any JSON number within [MIN_PRICE, MAX_PRICE].
pub fn validate_price(value: &Value) -> Result<f64, RestaurantPizzaValidationError> {
    let price = value
        .as_f64()
        .ok_or(RestaurantPizzaValidationError::PriceNotNumeric)?;

    if (MIN_PRICE..=MAX_PRICE).contains(&price) {
        Ok(price)
    } else {
        Err(RestaurantPizzaValidationError::PriceOutOfRange)
    }
}
