//! UI Components
//!
//! Leptos components for the leaderboard.

pub mod leaderboard;
pub mod loading;
pub mod row;

pub use leaderboard::Leaderboard;
