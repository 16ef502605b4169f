//! Domain DTOs for the task API.
//!
//! # Design
//! These mirror the backend's JSON schema (snake_case keys) but are defined
//! independently of the mock-server crate; the integration tests catch drift.
//! Request payloads serialize unset optionals as explicit `null` so the
//! backend can tell "clear this field" from "leave it alone".

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::debug;

/// Server-assigned task identifier.
pub type TaskId = u64;

/// Task priority. Declaration order is the sort order: high first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Colored marker shown next to the title.
    pub fn marker(self) -> &'static str {
        match self {
            Priority::High => "🔴",
            Priority::Medium => "🟡",
            Priority::Low => "🟢",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of `high`, `medium`, `low`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown priority {0:?}")]
pub struct UnknownPriority(pub String);

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(UnknownPriority(s.to_string())),
        }
    }
}

/// A single task as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Option<Priority>,
}

/// The backend stores priority as free text, so a value this client does
/// not know is read as unset instead of failing the whole list.
fn lenient_priority<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Priority>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value.parse() {
        Ok(priority) => Some(priority),
        Err(err) => {
            debug!(%err, "treating priority as unset");
            None
        }
    }))
}

/// Accepts both naive timestamps and RFC 3339 ones with an offset; the
/// latter are converted to UTC.
fn lenient_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse::<NaiveDateTime>()
        .or_else(|_| DateTime::parse_from_rfc3339(&raw).map(|dt| dt.naive_utc()))
        .map_err(serde::de::Error::custom)
}

/// Request payload for creating a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
}

/// Request payload for saving an inline edit.
///
/// Every editable field is sent, with `null` for the ones the user cleared.
/// `completed` is deliberately absent; only `ToggleCompletion` changes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditTask {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
}

/// Request payload that flips only the completion flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToggleCompletion {
    pub completed: bool,
}
