//! SQLite-backed store for students and attendance records.
//!
//! One method per query; callers never see the connection. Access is
//! serialized through a mutex and the guard is scoped to a single
//! operation, so the connection is released on every exit path.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, ErrorCode};

use crate::error::{AppError, AppResult};
use crate::models::{AttendanceEntry, DateGroup, DayRecord, Student, StudentTotals};

#[derive(Debug)]
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Open (or create) the store at the given path.
    pub fn open(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Self::from_connection(Connection::open(path)?)
    }

    /// In-memory store for test isolation.
    pub fn in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        conn.execute("PRAGMA foreign_keys = ON", [])?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS students(
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                roll_number TEXT NOT NULL UNIQUE
            )",
            [],
        )?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS attendance(
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                student_id INTEGER NOT NULL,
                date TEXT NOT NULL,
                status TEXT NOT NULL,
                FOREIGN KEY(student_id) REFERENCES students(id)
            )",
            [],
        )?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance(date)",
            [],
        )?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_attendance_student ON attendance(student_id)",
            [],
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Insert a new student and return its generated id. The roll number's
    /// UNIQUE index is the only duplicate check; a constraint failure maps
    /// to `DuplicateRollNumber` and leaves the table untouched.
    pub fn register_student(&self, name: &str, roll_number: &str) -> AppResult<i64> {
        if name.is_empty() || roll_number.is_empty() {
            return Err(AppError::MissingField);
        }
        let conn = self.conn.lock().expect("store mutex poisoned");
        match conn.execute(
            "INSERT INTO students(name, roll_number) VALUES(?, ?)",
            params![name, roll_number],
        ) {
            Ok(_) => Ok(conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == ErrorCode::ConstraintViolation =>
            {
                Err(AppError::DuplicateRollNumber)
            }
            Err(e) => Err(AppError::Db(e)),
        }
    }

    /// All students in insertion order (dashboard).
    pub fn list_students(&self) -> AppResult<Vec<Student>> {
        self.query_students("SELECT id, name, roll_number FROM students ORDER BY id")
    }

    /// All students in name order (mark-attendance form).
    pub fn list_students_by_name(&self) -> AppResult<Vec<Student>> {
        self.query_students("SELECT id, name, roll_number FROM students ORDER BY name")
    }

    fn query_students(&self, sql: &str) -> AppResult<Vec<Student>> {
        let conn = self.conn.lock().expect("store mutex poisoned");
        let mut stmt = conn.prepare(sql)?;
        let students = stmt
            .query_map([], |r| {
                Ok(Student {
                    id: r.get(0)?,
                    name: r.get(1)?,
                    roll_number: r.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(students)
    }

    /// Replace the day's records: delete everything stored for `date`, then
    /// insert one row per entry. Both steps run in one transaction, so a
    /// failed insert leaves the previously saved day intact.
    pub fn save_day(&self, date: &str, entries: &[AttendanceEntry]) -> AppResult<()> {
        if date.is_empty() || entries.is_empty() {
            return Err(AppError::InvalidRequest);
        }
        let conn = self.conn.lock().expect("store mutex poisoned");
        let tx = conn.unchecked_transaction()?;
        tx.execute("DELETE FROM attendance WHERE date = ?", params![date])?;
        for entry in entries {
            tx.execute(
                "INSERT INTO attendance(student_id, date, status) VALUES(?, ?, ?)",
                params![entry.student_id, date, entry.status],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Full history joined to student names, newest date first and
    /// name-ordered within each date, folded into per-date groups.
    pub fn attendance_by_date(&self) -> AppResult<Vec<DateGroup>> {
        let conn = self.conn.lock().expect("store mutex poisoned");
        let mut stmt = conn.prepare(
            "SELECT a.date, s.name, s.roll_number, a.status
             FROM attendance a
             JOIN students s ON a.student_id = s.id
             ORDER BY a.date DESC, s.name",
        )?;
        let rows = stmt
            .query_map([], |r| {
                Ok((
                    r.get::<_, String>(0)?,
                    DayRecord {
                        name: r.get(1)?,
                        roll_number: r.get(2)?,
                        status: r.get(3)?,
                    },
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        // Rows arrive sorted, so each date's records are consecutive.
        let mut groups: Vec<DateGroup> = Vec::new();
        for (date, record) in rows {
            match groups.last_mut() {
                Some(group) if group.date == date => group.records.push(record),
                _ => groups.push(DateGroup {
                    date,
                    records: vec![record],
                }),
            }
        }
        Ok(groups)
    }

    /// Lifetime present/absent/total counts per student, name-ordered.
    /// LEFT JOIN keeps students with no records in the report with zeros.
    pub fn per_student_totals(&self) -> AppResult<Vec<StudentTotals>> {
        let conn = self.conn.lock().expect("store mutex poisoned");
        let mut stmt = conn.prepare(
            "SELECT s.id, s.name, s.roll_number,
                    COUNT(CASE WHEN a.status = 'Present' THEN 1 END) AS present,
                    COUNT(CASE WHEN a.status = 'Absent' THEN 1 END) AS absent,
                    COUNT(a.id) AS total
             FROM students s
             LEFT JOIN attendance a ON s.id = a.student_id
             GROUP BY s.id
             ORDER BY s.name",
        )?;
        let totals = stmt
            .query_map([], |r| {
                Ok(StudentTotals {
                    id: r.get(0)?,
                    name: r.get(1)?,
                    roll_number: r.get(2)?,
                    present: r.get(3)?,
                    absent: r.get(4)?,
                    total: r.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(totals)
    }
}
