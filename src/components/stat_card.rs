//! Stat Card Component
//!
//! Small labeled figure for the dashboard summary row.

use leptos::*;

/// One summary figure with a label underneath
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] icon: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-slate-800 rounded-xl p-4 border border-slate-700 text-center">
            {icon.map(|icon| view! { <div class="text-2xl mb-1">{icon}</div> })}
            <div class="text-2xl font-bold">{move || value.get()}</div>
            <div class="text-sm text-slate-400 mt-1">{label}</div>
        </div>
    }
}
