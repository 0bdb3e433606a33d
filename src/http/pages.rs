//! HTML page handlers. Each builds its template context from a single
//! store call; rendering is compile-time checked by askama.

use std::sync::Arc;

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use chrono::Local;

use super::AppState;
use crate::error::AppResult;
use crate::models::{DateGroup, Student, StudentTotals};

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexPage;

pub async fn index() -> IndexPage {
    IndexPage
}

#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    students: Vec<Student>,
}

pub async fn dashboard(State(state): State<Arc<AppState>>) -> AppResult<DashboardPage> {
    Ok(DashboardPage {
        students: state.store.list_students()?,
    })
}

#[derive(Template, WebTemplate)]
#[template(path = "mark_attendance.html")]
pub struct MarkAttendancePage {
    students: Vec<Student>,
    today: String,
    statuses: Vec<String>,
}

pub async fn mark_attendance(
    State(state): State<Arc<AppState>>,
) -> AppResult<MarkAttendancePage> {
    Ok(MarkAttendancePage {
        students: state.store.list_students_by_name()?,
        today: Local::now().format("%Y-%m-%d").to_string(),
        statuses: state.config.statuses.clone(),
    })
}

#[derive(Template, WebTemplate)]
#[template(path = "view_attendance.html")]
pub struct ViewAttendancePage {
    groups: Vec<DateGroup>,
}

pub async fn view_attendance(
    State(state): State<Arc<AppState>>,
) -> AppResult<ViewAttendancePage> {
    Ok(ViewAttendancePage {
        groups: state.store.attendance_by_date()?,
    })
}

#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsPage {
    totals: Vec<StudentTotals>,
}

pub async fn attendance_stats(State(state): State<Arc<AppState>>) -> AppResult<StatsPage> {
    Ok(StatsPage {
        totals: state.store.per_student_totals()?,
    })
}
