//! App Root Component
//!
//! Page chrome around the leaderboard region. A load failure replaces only
//! the leaderboard, never this shell.

use leptos::*;

use crate::components::Leaderboard;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-[#1a1a1a] flex flex-col items-center py-12">
            <header class="mb-12 text-center">
                <h1 class="text-4xl font-extrabold text-transparent bg-clip-text bg-gradient-to-r from-orange-400 to-yellow-600 mb-2">
                    "# 1337"
                </h1>
                <p class="text-gray-400">"You can do better than Ray."</p>
            </header>

            <main class="w-full">
                <Leaderboard />
            </main>

            <footer class="mt-auto py-8 text-center text-gray-600 text-sm">
                <p>"Updates every 6 hours"</p>
            </footer>
        </div>
    }
}
