//! Leaderboard Component
//!
//! Composes the snapshot load state with the ranking engine's output. Owns
//! no ranking logic itself; rows own their expansion state.

use leptos::*;

use crate::api;
use crate::components::loading::{ErrorMessage, Loading, NoData};
use crate::components::row::UserRow;
use crate::model::Snapshot;
use crate::ranking::rank_users;

/// Leaderboard region.
///
/// Creates the snapshot resource once at mount, so exactly one fetch is
/// issued per session. The resource is the load state machine: `None` while
/// pending, then either a failure or the parsed snapshot, with no further
/// transitions. A resolution arriving after teardown is discarded with the
/// resource itself.
#[component]
pub fn Leaderboard() -> impl IntoView {
    let snapshot = create_local_resource(
        || (),
        |_| async {
            api::fetch_stats().await.map_err(|e| {
                web_sys::console::error_1(&format!("Snapshot load failed: {}", e).into());
                e
            })
        },
    );

    view! {
        <div class="max-w-4xl mx-auto p-6">
            {move || match snapshot.get() {
                None => view! { <Loading /> }.into_view(),
                Some(Err(e)) => {
                    view! { <ErrorMessage message=e.user_message() /> }.into_view()
                }
                Some(Ok(snap)) => {
                    let has_users = snap
                        .users
                        .as_ref()
                        .map_or(false, |users| !users.is_empty());
                    if has_users {
                        view! { <LeaderboardTable snapshot=snap /> }.into_view()
                    } else {
                        view! { <NoData /> }.into_view()
                    }
                }
            }}
        </div>
    }
}

/// The ranked table for a loaded, non-empty snapshot.
#[component]
fn LeaderboardTable(snapshot: Snapshot) -> impl IntoView {
    // Usernames are unique within a snapshot, so the ranked order is also
    // the row identity. Recomputed only when a new snapshot instantiates a
    // new table.
    let entries = snapshot.users.as_ref().map(rank_users).unwrap_or_default();

    let week_label = snapshot.week_start.as_deref().map(format_week_of);
    let updated_label = snapshot.last_updated.as_deref().map(format_updated);

    view! {
        <div class="bg-leetcode-dark rounded-xl shadow-2xl overflow-hidden border border-leetcode-gray">
            <div class="p-6 border-b border-leetcode-gray flex justify-between items-center bg-[#2f2f2f]">
                <div>
                    <h2 class="text-2xl font-bold text-white">"Weekly Leaderboard"</h2>
                    {week_label.map(|label| view! {
                        <p class="text-gray-400 text-sm mt-1">"Week of " {label}</p>
                    })}
                    {updated_label.map(|label| view! {
                        <p class="text-gray-500 text-xs mt-1">"Last updated " {label}</p>
                    })}
                </div>
                <div class="text-leetcode-yellow text-sm font-semibold px-3 py-1 bg-yellow-900/30 rounded-full border border-yellow-700/50">
                    "Season 1"
                </div>
            </div>

            <div class="divide-y divide-leetcode-gray">
                {entries
                    .into_iter()
                    .map(|entry| view! { <UserRow entry=entry /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Render the ISO-8601 week start as a readable date, falling back to the
/// raw value if the producer ever changes the format.
fn format_week_of(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%B %d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn format_updated(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %d, %H:%M UTC").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
