//! # REST API for Pizzas

use axum::{extract::State, response::Json, routing::get, Router};
use tracing::info;

use super::{error::ApiError, mappers::PizzaMapper};
use crate::AppState;
use shared::Pizza;

/// Create the pizza API router
pub fn router() -> Router<AppState> {
    Router::new().route("/pizzas", get(list_pizzas))
}

/// List all pizzas
pub async fn list_pizzas(State(state): State<AppState>) -> Result<Json<Vec<Pizza>>, ApiError> {
    info!("GET /pizzas");

    let pizzas = state.pizza_service.list_pizzas().await?;
    Ok(Json(PizzaMapper::to_list_dto(pizzas)))
}
