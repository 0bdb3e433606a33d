use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::AppState;
use crate::error::{AppError, AppResult};
use crate::models::AttendanceEntry;

/// Body of POST /save-attendance.
#[derive(Debug, Deserialize)]
pub struct SaveAttendance {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
}

/// Replaces the day's records with the submitted set. Every status must
/// come from the configured set (Present/Absent unless overridden).
pub async fn save_attendance(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SaveAttendance>,
) -> AppResult<Json<Value>> {
    if body.date.is_empty() || body.attendance.is_empty() {
        return Err(AppError::InvalidRequest);
    }
    if let Some(entry) = body
        .attendance
        .iter()
        .find(|e| !state.config.statuses.iter().any(|s| s == &e.status))
    {
        return Err(AppError::UnknownStatus(entry.status.clone()));
    }

    state.store.save_day(&body.date, &body.attendance)?;
    info!(date = %body.date, entries = body.attendance.len(), "saved attendance");
    Ok(Json(json!({ "success": true })))
}
