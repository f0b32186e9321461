//! # REST API for Restaurant Pizzas
//!
//! Creation is the only operation: associations are never updated and are
//! deleted only together with their restaurant.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use serde_json::Value;
use tracing::{info, warn};

use super::{error::ApiError, mappers::RestaurantPizzaMapper};
use crate::AppState;
use shared::RestaurantPizzaDetail;

/// Create the restaurant pizza API router
pub fn router() -> Router<AppState> {
    Router::new().route("/restaurant_pizzas", post(create_restaurant_pizza))
}

/// Create a restaurant pizza from `{price, pizza_id, restaurant_id}`
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaDetail>), ApiError> {
    let body = match payload {
        Ok(Json(Value::Object(body))) => body,
        Ok(Json(other)) => {
            warn!("POST /restaurant_pizzas - body is not an object: {}", other);
            return Err(ApiError::bad_request("Request body must be a JSON object"));
        }
        Err(rejection) => {
            warn!("POST /restaurant_pizzas - unreadable body: {}", rejection.body_text());
            return Err(ApiError::bad_request("Request body must be a JSON object"));
        }
    };
    info!("POST /restaurant_pizzas - request: {:?}", body);

    let command = RestaurantPizzaMapper::to_create_command(body);
    let details = state.restaurant_pizza_service.create_restaurant_pizza(command).await?;

    Ok((StatusCode::CREATED, Json(RestaurantPizzaMapper::to_detail_dto(details))))
}
