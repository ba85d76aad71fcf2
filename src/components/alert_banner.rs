//! Alert Banner Component
//!
//! Red banner across the top of the dashboard while the latest reading
//! breaches any threshold. Dismissing it only lasts until the next poll
//! that raises alerts; the active-alert count keeps updating regardless.

use leptos::*;

use crate::state::global::GlobalState;

/// Threshold alert banner
#[component]
pub fn AlertBanner() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let alerts = state.alerts;
    let dismissed = state.banner_dismissed;

    let visible = move || !alerts.get().is_empty() && !dismissed.get();
    let message = move || {
        alerts
            .get()
            .iter()
            .map(|a| a.message())
            .collect::<Vec<_>>()
            .join(" ")
    };

    view! {
        {move || {
            if visible() {
                view! {
                    <div class="flex items-center justify-between bg-red-600/90 border border-red-500
                                rounded-xl px-4 py-3 text-white">
                        <div class="flex items-center space-x-3">
                            <span class="text-xl">"⚠️"</span>
                            <span class="font-medium">{message()}</span>
                        </div>
                        <button
                            on:click=move |_| dismissed.set(true)
                            class="text-white/80 hover:text-white text-lg px-2"
                            aria-label="Dismiss alerts"
                        >
                            "✕"
                        </button>
                    </div>
                }.into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}
