//! Snapshot API
//!
//! HTTP access to the static stats snapshot.

pub mod client;

pub use client::{fetch_stats, FetchError};
