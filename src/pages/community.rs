//! Community Page
//!
//! Reporter leaderboard and community stats.

use leptos::*;

use crate::components::Leaderboard;

/// Community page component
#[component]
pub fn Community() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Community"</h1>
                <p class="text-slate-400 mt-1">"Reporter standings and community impact"</p>
            </div>

            <Leaderboard />
        </div>
    }
}
