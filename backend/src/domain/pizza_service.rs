use std::sync::Arc;
use tracing::info;

use super::errors::DomainResult;
use super::models::Pizza;
use crate::storage::PizzaStorage;

/// Service for reading pizzas
#[derive(Clone)]
pub struct PizzaService {
    pizzas: Arc<dyn PizzaStorage>,
}

impl PizzaService {
    pub fn new(pizzas: Arc<dyn PizzaStorage>) -> Self {
        Self { pizzas }
    }

    /// List every pizza
    pub async fn list_pizzas(&self) -> DomainResult<Vec<Pizza>> {
        let pizzas = self.pizzas.list_pizzas().await?;
        info!("Found {} pizzas", pizzas.len());
        Ok(pizzas)
    }
}
