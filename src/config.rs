use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

/// Documented default for the accepted attendance status set.
pub const DEFAULT_STATUSES: [&str; 2] = ["Present", "Absent"];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Store location, injected into `Store::open` so tests can point the
    /// service at a temporary or in-memory database.
    pub db_path: PathBuf,
    /// Status labels accepted by save-attendance.
    pub statuses: Vec<String>,
}

impl AppConfig {
    pub fn load() -> Self {
        Self {
            port: try_load("ROLLCALL_PORT", "5000"),
            db_path: PathBuf::from(try_load::<String>("ROLLCALL_DB", "rollcall.sqlite3")),
            statuses: parse_statuses(env::var("ROLLCALL_STATUSES").ok().as_deref()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            db_path: PathBuf::from("rollcall.sqlite3"),
            statuses: parse_statuses(None),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("environment misconfigured")
}

/// Comma-separated status labels. Blank or unset falls back to the
/// Present/Absent pair.
fn parse_statuses(raw: Option<&str>) -> Vec<String> {
    let parsed: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if parsed.is_empty() {
        DEFAULT_STATUSES.iter().map(|s| s.to_string()).collect()
    } else {
        parsed
    }
}
