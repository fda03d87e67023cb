#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use sea_orm::{Database, DatabaseConnection, DbErr};
use serde_json::{Value, json};
use tower::ServiceExt;
use training_registry::app;

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    app::create_tables(&db).await?;
    Ok(db)
}

pub fn setup_test_app(db: &DatabaseConnection) -> Router {
    app::build_router(db, "/api")
}

pub async fn setup() -> (DatabaseConnection, Router) {
    let db = setup_test_db()
        .await
        .expect("Failed to setup test database");
    let app = setup_test_app(&db);
    (db, app)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Send a raw request body; non-JSON responses come back as a JSON string.
pub async fn send_raw(app: &Router, method: &str, uri: &str, body: Option<String>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(body) => {
            builder = builder.header("content-type", "application/json");
            Body::from(body)
        }
        None => Body::empty(),
    };
    let request = builder.body(body).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    send_raw(app, method, uri, body.map(|value| value.to_string())).await
}

pub async fn create(app: &Router, resource: &str, body: Value) -> Value {
    let response = send(app, "POST", &format!("/api/{resource}"), Some(body)).await;
    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "creating {resource} failed: {}",
        response.body
    );
    response.body
}

pub async fn create_person(app: &Router, first_name: &str, last_name: &str, document: &str) -> Value {
    create(
        app,
        "person",
        json!({
            "first_name": first_name,
            "last_name": last_name,
            "document": document,
            "email": format!("{}@example.com", first_name.to_lowercase()),
        }),
    )
    .await
}

pub fn id_of(entity: &Value) -> i64 {
    entity["id"].as_i64().expect("entity has an integer id")
}
