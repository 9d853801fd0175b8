//! User Row Component
//!
//! One ranked entry with its own expand/collapse state. Rows are
//! independent; any number of them can be expanded at once.

use leptos::*;

use crate::model::Problem;
use crate::ranking::{rank_tier, RankedEntry};

/// A single leaderboard row.
///
/// Clicking the summary area toggles the weekly history below it. The
/// profile link stops propagation so following it never toggles the row.
#[component]
pub fn UserRow(entry: RankedEntry) -> impl IntoView {
    let (expanded, set_expanded) = create_signal(false);
    // Dropped from the DOM after the first load error, so a missing avatar
    // cannot loop through further error events.
    let (avatar_ok, set_avatar_ok) = create_signal(true);

    let username = entry.username.clone();
    let avatar_src = format!("assets/{}.png", entry.username);
    let profile_url = format!("https://leetcode.com/{}", entry.username);
    let tier_class = rank_tier(entry.rank).class();
    let history = entry.history.clone();

    view! {
        <div class="group transition-colors hover:bg-[#323232]">
            <div
                class="p-4 flex items-center cursor-pointer"
                on:click=move |_| set_expanded.update(|open| *open = !*open)
            >
                <div class=format!(
                    "w-8 h-8 flex items-center justify-center rounded-lg font-bold mr-4 {}",
                    tier_class
                )>
                    {entry.rank}
                </div>

                {move || {
                    avatar_ok.get().then(|| view! {
                        <img
                            src=avatar_src.clone()
                            alt=username.clone()
                            class="w-10 h-10 rounded-full mr-4 object-cover border-2 border-[#444]"
                            on:error=move |_| set_avatar_ok.set(false)
                        />
                    })
                }}

                <div class="flex-1">
                    <h3 class="text-lg font-medium text-white flex items-center hover:text-blue-400 transition-colors">
                        <a
                            href=profile_url
                            target="_blank"
                            rel="noreferrer"
                            on:click=|ev| ev.stop_propagation()
                        >
                            {entry.username.clone()}
                        </a>
                    </h3>
                    <p class="text-xs text-gray-500">"Total Solved: " {entry.total_solved}</p>
                </div>

                <div class="text-right">
                    <div class="text-2xl font-bold text-green-400">
                        "+" {entry.weekly_solved}
                    </div>
                    <div class="text-xs text-gray-500 uppercase tracking-wider">
                        "Problems"
                    </div>
                </div>

                <div class=move || format!(
                    "ml-4 text-gray-400 transform transition-transform {}",
                    if expanded.get() { "rotate-180" } else { "" }
                )>
                    "▼"
                </div>
            </div>

            {move || {
                expanded.get().then(|| view! {
                    <RowHistory history=history.clone() />
                })
            }}
        </div>
    }
}

/// The expanded body: this week's solved problems as outbound links,
/// ordered as delivered in the snapshot.
#[component]
fn RowHistory(history: Vec<Problem>) -> impl IntoView {
    view! {
        <div class="bg-[#222] p-4 pl-16 border-t border-[#333]">
            <h4 class="text-xs text-gray-500 uppercase tracking-wider mb-3">
                "Recently Solved"
            </h4>

            {if history.is_empty() {
                view! {
                    <p class="text-sm text-gray-600 italic">
                        "No detailed history available for this week yet."
                    </p>
                }.into_view()
            } else {
                view! {
                    <ul class="space-y-2">
                        {history.into_iter().map(|problem| {
                            let url = format!(
                                "https://leetcode.com/problems/{}",
                                problem.title_slug
                            );
                            let solved_on = format_solved_date(problem.timestamp);
                            view! {
                                <li class="flex items-center text-sm">
                                    <span class="w-1.5 h-1.5 bg-green-500 rounded-full mr-2"></span>
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noreferrer"
                                        class="text-gray-300 hover:text-green-400 transition-colors"
                                    >
                                        {problem.title}
                                    </a>
                                    <span class="text-gray-600 text-xs ml-auto">{solved_on}</span>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }.into_view()
            }}
        </div>
    }
}

fn format_solved_date(unix_seconds: i64) -> String {
    chrono::DateTime::from_timestamp(unix_seconds, 0)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_solved_date() {
        assert_eq!(format_solved_date(1_756_700_000), "Sep 01, 2025");
    }

    #[test]
    fn test_format_solved_date_out_of_range_is_empty() {
        assert_eq!(format_solved_date(i64::MAX), "");
    }
}
