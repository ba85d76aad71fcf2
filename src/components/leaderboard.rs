//! Leaderboard Component
//!
//! Community stats and reporter standings, both derived from the same
//! report log that feeds the recent list.

use leptos::*;

use crate::components::stat_card::StatCard;
use crate::state::global::GlobalState;
use crate::storage::{LeaderboardEntry, LeaderboardPeriod};

/// Community stats and top reporters
#[component]
pub fn Leaderboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (period, set_period) = create_signal(LeaderboardPeriod::default());
    let reports = state.reports;

    let standings = create_memo(move |_| reports.get().leaderboard(period.get()));
    let stats = create_memo(move |_| reports.get().community_stats());

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard
                    label="Total Reports"
                    icon="📋"
                    value=Signal::derive(move || stats.get().total_reports.to_string())
                />
                <StatCard
                    label="Fastest Response"
                    icon="⚡"
                    value=Signal::derive(move || stats.get().fastest_response.to_string())
                />
                <StatCard
                    label="Issues Resolved"
                    icon="✅"
                    value=Signal::derive(move || stats.get().issues_resolved.to_string())
                />
            </div>

            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">"Top Reporters"</h2>
                <select
                    on:change=move |ev| {
                        set_period.set(LeaderboardPeriod::from_value(&event_target_value(&ev)));
                    }
                    prop:value=move || period.get().value()
                    class="bg-slate-700 rounded-lg px-3 py-2 text-sm text-white
                           border border-slate-600 focus:border-blue-500 focus:outline-none"
                >
                    {LeaderboardPeriod::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.value()>{p.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="bg-slate-800 rounded-xl border border-slate-700 overflow-hidden">
                {move || {
                    let entries = standings.get();

                    if entries.is_empty() {
                        view! {
                            <p class="text-center text-slate-400 py-10">
                                "No data yet. Start reporting to appear on the leaderboard!"
                            </p>
                        }
                        .into_view()
                    } else {
                        view! {
                            <table class="w-full text-sm">
                                <thead>
                                    <tr class="text-left text-slate-400 border-b border-slate-700">
                                        <th class="px-4 py-3">"Rank"</th>
                                        <th class="px-4 py-3">"Reporter"</th>
                                        <th class="px-4 py-3 text-right">"Reports"</th>
                                        <th class="px-4 py-3 text-right">"Points"</th>
                                        <th class="px-4 py-3 text-right">"Badge"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {entries
                                        .into_iter()
                                        .map(|entry| view! { <StandingsRow entry=entry /> })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_view()
                    }
                }}
            </div>
        </div>
    }
}

/// One leaderboard row
#[component]
fn StandingsRow(entry: LeaderboardEntry) -> impl IntoView {
    let rank_class = format!(
        "inline-flex items-center justify-center w-7 h-7 rounded-full text-xs font-bold {}",
        rank_colors(entry.rank)
    );

    let badge = match entry.badge() {
        Some(name) => view! {
            <span class="px-2 py-1 rounded text-xs font-semibold bg-slate-700 text-slate-200">
                {name.to_uppercase()}
            </span>
        }
        .into_view(),
        None => view! { <span class="text-slate-500">"-"</span> }.into_view(),
    };

    view! {
        <tr class="border-b border-slate-700/50 last:border-0">
            <td class="px-4 py-3">
                <span class=rank_class>{entry.rank}</span>
            </td>
            <td class="px-4 py-3">{entry.name.clone()}</td>
            <td class="px-4 py-3 text-right">{entry.reports}</td>
            <td class="px-4 py-3 text-right font-semibold">{entry.points}</td>
            <td class="px-4 py-3 text-right">{badge}</td>
        </tr>
    }
}

/// Medal colors for the top three ranks
fn rank_colors(rank: usize) -> &'static str {
    match rank {
        1 => "bg-yellow-500 text-slate-900",
        2 => "bg-slate-300 text-slate-900",
        3 => "bg-amber-700 text-white",
        _ => "bg-slate-700 text-slate-300",
    }
}
