//! # 1337 Weekly Leaderboard
//!
//! Weekly problem-solving leaderboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches a static `stats.json` snapshot once per session,
//! ranks the users it contains, and renders the result as an expandable
//! leaderboard. The snapshot is produced by an external updater job; this
//! crate only reads it.

use leptos::*;

mod api;
mod app;
mod components;
mod model;
mod ranking;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
