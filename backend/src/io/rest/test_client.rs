//! Request helpers for driving the full router in tests.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

use crate::storage::test_utils::{SampleData, TestEnvironment};
use crate::{create_router, AppState};

pub struct TestApp {
    pub router: Router,
    pub env: TestEnvironment,
}

/// Router over a store holding the sample restaurants, pizzas and associations
pub async fn setup_test_app() -> (TestApp, SampleData) {
    let (env, sample) = TestEnvironment::with_sample_data()
        .await
        .expect("Failed to create test environment");
    let router = create_router(AppState::new(env.connection.clone()));
    (TestApp { router, env }, sample)
}

impl TestApp {
    /// Send a request and return the status, raw body and body parsed as JSON
    /// (`Value::Null` when the body is empty or not JSON)
    pub async fn send(&self, method: Method, uri: &str, body: Option<String>) -> (StatusCode, String, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(body) => {
                builder = builder.header("content-type", "application/json");
                Body::from(body)
            }
            None => Body::empty(),
        };
        let request = builder.body(body).unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        let json = serde_json::from_str(&text).unwrap_or(Value::Null);
        (status, text, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let (status, _, json) = self.send(Method::GET, uri, None).await;
        (status, json)
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let (status, _, json) = self.send(Method::POST, uri, Some(body.to_string())).await;
        (status, json)
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, String) {
        let (status, text, _) = self.send(Method::DELETE, uri, None).await;
        (status, text)
    }
}
