//! Snapshot HTTP Client
//!
//! Fetches the `stats.json` snapshot the updater job publishes next to the
//! app bundle. One fetch per session; there is no retry, a page reload is
//! the only recovery path.

use gloo_net::http::Request;
use thiserror::Error;

use crate::model::Snapshot;

/// Relative location of the snapshot, served same-origin with the bundle.
pub const STATS_URL: &str = "stats.json";

/// Ways a snapshot load can fail. All of them surface to the user as the
/// same message; the distinction exists for the console log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Request never produced a response
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-2xx response status
    #[error("HTTP error: status {0}")]
    Status(u16),

    /// Response body was not a valid snapshot document
    #[error("Parse error: {0}")]
    Parse(String),
}

impl FetchError {
    /// The single message shown to the user for any load failure.
    pub fn user_message(&self) -> &'static str {
        "Failed to load stats"
    }
}

/// Fetch and parse the stats snapshot.
///
/// Plain GET, no headers or query parameters. Callers issue this exactly
/// once per leaderboard mount.
pub async fn fetch_stats() -> Result<Snapshot, FetchError> {
    let response = Request::get(STATS_URL)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<Snapshot>()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_distinguishes_variants() {
        let err = FetchError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = FetchError::Status(404);
        assert_eq!(err.to_string(), "HTTP error: status 404");

        let err = FetchError::Parse("expected value at line 1".to_string());
        assert_eq!(err.to_string(), "Parse error: expected value at line 1");
    }

    #[test]
    fn test_user_message_is_uniform_and_non_empty() {
        let errors = [
            FetchError::Transport("down".to_string()),
            FetchError::Status(500),
            FetchError::Parse("bad json".to_string()),
        ];
        for err in &errors {
            assert_eq!(err.user_message(), "Failed to load stats");
        }
    }
}
