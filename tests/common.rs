#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, Response};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use rollcalld::config::AppConfig;
use rollcalld::db::Store;
use rollcalld::http::{router, AppState};

/// Router over a fresh in-memory store with default configuration.
pub fn app() -> Router {
    app_with_config(AppConfig::default())
}

pub fn app_with_config(config: AppConfig) -> Router {
    let store = Store::in_memory().expect("in-memory store");
    router(Arc::new(AppState { store, config }))
}

pub async fn get(app: &Router, path: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::get(path).body(Body::empty()).expect("request"))
        .await
        .expect("response")
}

pub async fn post_json(app: &Router, path: &str, body: Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::post(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response")
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub async fn text_body(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Register a student and return the generated id.
pub async fn add_student(app: &Router, name: &str, roll_number: &str) -> i64 {
    let response = post_json(
        app,
        "/add-student",
        serde_json::json!({ "name": name, "roll_number": roll_number }),
    )
    .await;
    assert!(response.status().is_success(), "add-student failed");
    json_body(response).await["id"].as_i64().expect("id")
}
