use serde::{Deserialize, Serialize};

/// A registered student. `roll_number` is the human-assigned unique
/// identifier; `id` is the store-generated surrogate key.
#[derive(Debug, Clone, Serialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub roll_number: String,
}

/// One (student, status) pair from a save-attendance request.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub status: String,
}

/// A single row of the grouped history view.
#[derive(Debug, Clone)]
pub struct DayRecord {
    pub name: String,
    pub roll_number: String,
    pub status: String,
}

/// All records for one calendar date, in student-name order.
#[derive(Debug, Clone)]
pub struct DateGroup {
    pub date: String,
    pub records: Vec<DayRecord>,
}

/// Lifetime attendance counts for one student.
#[derive(Debug, Clone, Serialize)]
pub struct StudentTotals {
    pub id: i64,
    pub name: String,
    pub roll_number: String,
    pub present: i64,
    pub absent: i64,
    pub total: i64,
}
