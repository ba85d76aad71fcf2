//! Settings Page
//!
//! Backend connection configuration, alert threshold reference, and about.

use leptos::*;

use crate::alerts::ThresholdConfig;
use crate::api;
use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-slate-400 mt-1">"Configure your LeakSense dashboard"</p>
            </div>

            // API Connection
            <ApiSettings />

            // Alert thresholds
            <AlertThresholds />

            // About
            <AboutSection />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);

    // Probes the typed URL without saving it, so a bad address can be
    // tried out while polling keeps using the stored one.
    let state_for_test = state.clone();
    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        let url = api_url.get();
        let state_clone = state_for_test.clone();
        spawn_local(async move {
            match api::check_health_with_retry(&url, 3).await {
                Ok(health) if health.is_healthy() => {
                    set_test_result.set(Some(true));
                    state_clone.show_success("Connection successful!");
                }
                Ok(_) => {
                    set_test_result.set(Some(false));
                    state_clone.show_error("API reachable but not healthy");
                }
                Err(e) => {
                    set_test_result.set(Some(false));
                    state_clone.show_error(&format!("Connection failed: {}", e));
                }
            }
            set_testing.set(false);
        });
    };

    let state_for_save = state.clone();
    let save_url = move |_| {
        let url = api_url.get();
        api::set_api_base(url.trim_end_matches('/'));
        state_for_save.show_success("API URL saved");
    };

    view! {
        <section class="bg-slate-800 rounded-xl p-6 border border-slate-700">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div class="space-y-4">
                // API URL
                <div>
                    <label class="block text-sm text-slate-400 mb-2">"LeakSense API URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="flex-1 bg-slate-700 rounded-lg px-4 py-3 text-white
                                   border border-slate-600 focus:border-blue-500 focus:outline-none"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-3 bg-slate-600 hover:bg-slate-500 disabled:bg-slate-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                        <button
                            on:click=save_url
                            class="px-4 py-3 bg-blue-600 hover:bg-blue-700
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                    </div>
                </div>

                // Test outcome
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-slate-400">"Status:"</span>
                    {move || {
                        match test_result.get() {
                            Some(true) => view! {
                                <span class="text-green-400">"✓ Connected"</span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="text-red-400">"✕ Failed"</span>
                            }.into_view(),
                            None => view! {
                                <span class="text-slate-400">"Not tested"</span>
                            }.into_view(),
                        }
                    }}
                </div>

                // Live polling status
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-slate-400">"Live status:"</span>
                    {
                        let connection = state.connection;
                        move || {
                            let status = connection.get();
                            let class = if status.is_connected() {
                                "text-green-400"
                            } else {
                                "text-red-400"
                            };
                            view! { <span class=class>{status.label()}</span> }
                        }
                    }
                </div>
            </div>
        </section>
    }
}

/// Threshold reference card. The cutoffs are compiled in; this section just
/// surfaces them so the dashboard's alerts are explainable.
#[component]
fn AlertThresholds() -> impl IntoView {
    let thresholds = ThresholdConfig::DEFAULT;

    view! {
        <section class="bg-slate-800 rounded-xl p-6 border border-slate-700">
            <h2 class="text-xl font-semibold mb-4">"Alert Thresholds"</h2>

            <div class="grid md:grid-cols-3 gap-4 text-sm">
                <div class="p-4 bg-slate-700 rounded-lg">
                    <h3 class="font-medium text-white mb-2">"Pressure (PSI)"</h3>
                    <ul class="space-y-1 text-slate-400">
                        <li>{format!("Low below {:.0}", thresholds.pressure.min)}</li>
                        <li>{format!("High above {:.0}", thresholds.pressure.max)}</li>
                    </ul>
                </div>

                <div class="p-4 bg-slate-700 rounded-lg">
                    <h3 class="font-medium text-white mb-2">"Moisture (%)"</h3>
                    <ul class="space-y-1 text-slate-400">
                        <li>{format!("High above {:.0}", thresholds.moisture.warning)}</li>
                        <li>{format!("Critical above {:.0}", thresholds.moisture.danger)}</li>
                    </ul>
                </div>

                <div class="p-4 bg-slate-700 rounded-lg">
                    <h3 class="font-medium text-white mb-2">"Acoustic (dB)"</h3>
                    <ul class="space-y-1 text-slate-400">
                        <li>{format!("High above {:.0}", thresholds.acoustic.warning)}</li>
                        <li>{format!("Critical above {:.0}", thresholds.acoustic.danger)}</li>
                    </ul>
                </div>
            </div>
        </section>
    }
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="bg-slate-800 rounded-xl p-6 border border-slate-700">
            <h2 class="text-xl font-semibold mb-4">"About LeakSense"</h2>

            <div class="space-y-4 text-slate-300">
                <p>
                    "LeakSense watches a water pipeline through pressure, moisture, and "
                    "acoustic sensors, and lets the community report issues the sensors miss."
                </p>

                <div class="grid md:grid-cols-2 gap-4 text-sm">
                    <div class="p-4 bg-slate-700 rounded-lg">
                        <h3 class="font-medium text-white mb-2">"Built With"</h3>
                        <ul class="space-y-1 text-slate-400">
                            <li>"• Rust + Leptos (WASM UI)"</li>
                            <li>"• Canvas-rendered gauges and charts"</li>
                            <li>"• LeakSense REST API"</li>
                        </ul>
                    </div>

                    <div class="p-4 bg-slate-700 rounded-lg">
                        <h3 class="font-medium text-white mb-2">"Features"</h3>
                        <ul class="space-y-1 text-slate-400">
                            <li>"• Live sensor gauges and alerts"</li>
                            <li>"• 24-hour history charts"</li>
                            <li>"• Community issue reporting"</li>
                        </ul>
                    </div>
                </div>

                <p class="text-sm text-slate-400">
                    {format!("Version {} • Made with 💧 using Rust", env!("CARGO_PKG_VERSION"))}
                </p>
            </div>
        </section>
    }
}
