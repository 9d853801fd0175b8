//! Load-State Affordances
//!
//! The three bounded replacements for the leaderboard region: loading,
//! failed, and no-data. Each renders alone; none constructs any row state.

use leptos::*;

/// Shown while the snapshot fetch is pending.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="p-10 text-center text-gray-400">"Loading stats..."</div>
    }
}

/// Shown when the snapshot fetch failed.
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="p-10 text-center text-red-500">"Error: " {message}</div>
    }
}

/// Shown when the snapshot loaded but carries no users.
#[component]
pub fn NoData() -> impl IntoView {
    view! {
        <div class="p-10 text-center">"No data available"</div>
    }
}
