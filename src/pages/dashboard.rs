//! Dashboard Page
//!
//! Live view: alert banner, the three sensor gauges, the history chart,
//! and a summary row.

use leptos::*;

use crate::components::gauge::GaugeKind;
use crate::components::{AlertBanner, SensorCard, SensorChart, StatCard};
use crate::format::fmt_count;
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_chart = state.clone();
    let state_for_stats = state.clone();
    let state_for_alerts = state.clone();
    let state_for_signal = state.clone();

    view! {
        <div class="space-y-8">
            <AlertBanner />

            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-slate-400 mt-1">"Live readings from the pipeline sensors"</p>
                </div>

                <div class="text-sm text-slate-400">
                    {move || state.last_update.get().map(|ago| format!("Updated {}", ago))}
                </div>
            </div>

            // Gauges
            <section class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <SensorCard kind=GaugeKind::Pressure />
                <SensorCard kind=GaugeKind::Moisture />
                <SensorCard kind=GaugeKind::Acoustic />
            </section>

            // History chart
            <section class="bg-slate-800 rounded-xl p-6 border border-slate-700">
                <h2 class="text-xl font-semibold mb-4">"Sensor History"</h2>

                {move || {
                    if state_for_chart.loading.get() {
                        view! {
                            <div class="h-64 flex items-center justify-center">
                                <div class="loading-spinner w-8 h-8" />
                            </div>
                        }
                        .into_view()
                    } else {
                        view! { <SensorChart /> }.into_view()
                    }
                }}
            </section>

            // Summary row
            <section class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard
                    label="Readings (24h)"
                    icon="📡"
                    value=Signal::derive(move || {
                        fmt_count(state_for_stats.stats.get().map(|s| s.total_readings))
                    })
                />
                <StatCard
                    label="Active Alerts"
                    icon="🚨"
                    value=Signal::derive(move || state_for_alerts.active_alerts().to_string())
                />
                <StatCard
                    label="Signal"
                    icon="📶"
                    value=Signal::derive(move || {
                        state_for_signal
                            .latest
                            .get()
                            .and_then(|r| r.signal_label())
                            .unwrap_or_else(|| "--".to_string())
                    })
                />
            </section>
        </div>
    }
}
