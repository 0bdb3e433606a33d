use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::AppState;
use crate::error::AppResult;

/// Body of POST /add-student. Absent fields default to empty strings so
/// the store's presence check owns the error, not the deserializer.
#[derive(Debug, Deserialize)]
pub struct AddStudent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roll_number: String,
}

pub async fn add_student(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AddStudent>,
) -> AppResult<Json<Value>> {
    let id = state
        .store
        .register_student(body.name.trim(), body.roll_number.trim())?;
    info!(id, roll_number = %body.roll_number, "registered student");
    Ok(Json(json!({ "success": true, "id": id })))
}
