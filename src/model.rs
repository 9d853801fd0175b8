//! Snapshot Wire Types
//!
//! Shapes of the `stats.json` payload written by the external updater job.
//! Unknown fields are ignored so the frontend tolerates producer additions
//! (the updater already writes bookkeeping fields like `last_check_solved`
//! that the UI has no use for).

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// One fetched snapshot of every tracked user's statistics.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Snapshot {
    /// ISO-8601 start of the current scoring week (Monday 00:00 UTC).
    #[serde(default)]
    pub week_start: Option<String>,
    /// ISO-8601 time the snapshot was last written, when the producer
    /// records it.
    #[serde(default)]
    pub last_updated: Option<String>,
    /// Absent or null until the producer has written any users. That is a
    /// shape problem, not a fetch failure: the view renders the no-data
    /// state instead of the error state.
    #[serde(default)]
    pub users: Option<HashMap<String, UserStat>>,
}

/// Per-user statistics as of snapshot time.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UserStat {
    /// Cumulative accepted-problem count.
    pub total_solved: u32,
    /// Cumulative count recorded at the start of the week.
    pub weekly_baseline: u32,
    /// Problems solved this week, most recent first as delivered.
    #[serde(default)]
    pub history: Vec<Problem>,
}

/// One solved problem in a user's weekly history.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Problem {
    pub id: String,
    pub title: String,
    #[serde(rename = "titleSlug")]
    pub title_slug: String,
    /// Unix seconds. The producer passes the upstream value through as a
    /// string, so both string and integer forms are accepted.
    #[serde(deserialize_with = "unix_seconds")]
    pub timestamp: i64,
}

fn unix_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Ok(n),
        Raw::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
