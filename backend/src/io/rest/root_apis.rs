//! # Root and catch-all handlers

use axum::response::{Html, IntoResponse, Response};
use std::any::Any;
use tracing::{error, info};

use super::error::{internal_error_response, ApiError};

/// GET /
pub async fn index() -> Html<&'static str> {
    info!("GET /");
    Html("<h1>Welcome to the Pizza Restaurant API!</h1>")
}

/// Any request no route matched
pub async fn not_found(uri: axum::http::Uri) -> impl IntoResponse {
    info!("No route for {}", uri);
    ApiError::RouteNotFound
}

/// A known route called with a method it does not serve
pub async fn method_not_allowed(method: axum::http::Method, uri: axum::http::Uri) -> impl IntoResponse {
    info!("{} not allowed on {}", method, uri);
    ApiError::MethodNotAllowed
}

/// Turns a handler panic into the generic 500 response
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Handler panicked: {}", detail);

    internal_error_response()
}
