//! HTTP surface: shared state, the route table, and the handlers.

pub mod attendance;
pub mod pages;
pub mod students;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::db::Store;

/// Shared across all handlers. The store serializes its own access; the
/// config is read-only after startup.
#[derive(Debug)]
pub struct AppState {
    pub store: Store,
    pub config: AppConfig,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/dashboard", get(pages::dashboard))
        .route("/mark-attendance", get(pages::mark_attendance))
        .route("/add-student", post(students::add_student))
        .route("/save-attendance", post(attendance::save_attendance))
        .route("/view-attendance", get(pages::view_attendance))
        .route("/attendance-stats", get(pages::attendance_stats))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
