//! Domain-level command types.
//! The REST layer maps request bodies onto these; they are not part of the
//! public API.

pub mod restaurant_pizza {
    use serde_json::Value;

    /// Input for creating an association.
    ///
    /// Fields hold the raw request values so that presence, reference and
    /// price checks can each report their own error.
    #[derive(Debug, Clone, Default)]
    pub struct CreateRestaurantPizzaCommand {
        pub price: Option<Value>,
        pub pizza_id: Option<Value>,
        pub restaurant_id: Option<Value>,
    }
}
