//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use user_registry::api::create_router;
use user_registry::infra::{Database, UserRepository, UserStore};
use user_registry::{AppState, Config};

/// Fresh in-memory SQLite database with migrations applied.
///
/// A single pooled connection keeps the in-memory database alive and shared.
pub async fn test_database() -> Arc<Database> {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        database_min_connections: 1,
        ..Config::default()
    };

    Arc::new(Database::connect(&config).await.expect("test database"))
}

/// Router plus a direct handle on the store backing it.
pub struct TestApp {
    pub router: Router,
    pub store: UserStore,
}

impl TestApp {
    pub async fn new() -> Self {
        let database = test_database().await;
        let store = UserStore::new(database.get_connection());
        let router = create_router(AppState::from_database(database));
        Self { router, store }
    }

    /// Insert a user straight into the store, bypassing HTTP.
    pub async fn seed(&self, email: &str, password: &str) -> user_registry::User {
        self.store
            .create(Some(email.to_string()), Some(password.to_string()))
            .await
            .expect("seed user")
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::ACCEPT, "application/json");

        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }
}
