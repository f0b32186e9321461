//! # REST API for Restaurants
//!
//! Listing, detail (with each association and its pizza) and deletion.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::info;

use super::{error::ApiError, mappers::RestaurantMapper};
use crate::AppState;
use shared::{Restaurant, RestaurantDetail};

/// Create the restaurant API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/:id", get(get_restaurant).delete(delete_restaurant))
}

/// A path id that is not an integer does not name a route at all
fn restaurant_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id).map_err(|_| ApiError::RouteNotFound)
}

/// List all restaurants
pub async fn list_restaurants(State(state): State<AppState>) -> Result<Json<Vec<Restaurant>>, ApiError> {
    info!("GET /restaurants");

    let restaurants = state.restaurant_service.list_restaurants().await?;
    Ok(Json(RestaurantMapper::to_list_dto(restaurants)))
}

/// Get a restaurant with its restaurant_pizzas
pub async fn get_restaurant(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<RestaurantDetail>, ApiError> {
    let id = restaurant_id(path)?;
    info!("GET /restaurants/{}", id);

    let details = state.restaurant_service.get_restaurant(id).await?;
    Ok(Json(RestaurantMapper::to_detail_dto(details)))
}

/// Delete a restaurant and its restaurant_pizzas
pub async fn delete_restaurant(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = restaurant_id(path)?;
    info!("DELETE /restaurants/{}", id);

    state.restaurant_service.delete_restaurant(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
