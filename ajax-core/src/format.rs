//! Display helpers for values the server sends back.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const MONTHS_TR: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// Progress state of a workflow task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
    Blocked,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Failed,
        TaskStatus::Blocked,
    ];

    /// Wire name, as the server sends it.
    pub fn code(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Failed => "FAILED",
            TaskStatus::Blocked => "BLOCKED",
        }
    }

    /// Label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Beklemede",
            TaskStatus::InProgress => "Devam Ediyor",
            TaskStatus::Completed => "Tamamlandı",
            TaskStatus::Failed => "Başarısız",
            TaskStatus::Blocked => "Engellendi",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown task status {0:?}")]
pub struct UnknownStatus(pub String);

/// Label for a status code; unknown codes are returned as-is.
pub fn format_status(code: &str) -> &str {
    match code.parse::<TaskStatus>() {
        Ok(status) => status.label(),
        Err(_) => code,
    }
}

/// Render a timestamp as `"18 Ekim 2026 14:05"`.
///
/// RFC 3339 input is shown in its own UTC offset. Timestamps without an
/// offset (`2026-10-18T14:05:00`, `2026-10-18T14:05`) are shown as written.
pub fn format_date(timestamp: &str) -> Result<String> {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(date) => Ok(render_date(&date)),
        Err(err) => NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(timestamp, fmt).ok())
            .map(|date| render_date(&date))
            .ok_or(Error::Date(err)),
    }
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

fn render_date<D: Datelike + Timelike>(date: &D) -> String {
    format!(
        "{} {} {} {:02}:{:02}",
        date.day(),
        MONTHS_TR[date.month0() as usize],
        date.year(),
        date.hour(),
        date.minute()
    )
}
