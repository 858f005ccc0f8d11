use crate::server::{router, state::AppState};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

mod create;

/// Builds the application router over a fresh in-memory database.
///
/// The returned `TestContext` owns the database and must outlive the router's use.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new()
        .with_exercise_tables()
        .build()
        .await
        .unwrap();

    let db = test.db.clone().unwrap();
    let app = router::router().with_state(AppState::new(db));

    (test, app)
}

/// Sends a request through the router and returns the status and JSON body.
///
/// An empty body is returned as `Value::Null`.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

fn curl_body() -> Value {
    json!({
        "name": "Curl",
        "reps": 10,
        "weight": 20,
        "unit": "kgs",
        "date": "01-02-23"
    })
}

fn not_found() -> Value {
    json!({ "Error": "Not found" })
}

fn invalid_request() -> Value {
    json!({ "Error": "Invalid request" })
}

async fn exercise_count(test: &TestContext) -> Result<u64, DbErr> {
    entity::prelude::Exercise::find()
        .count(test.db.as_ref().unwrap())
        .await
}
