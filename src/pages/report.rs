//! Report Page
//!
//! Community issue reporting: the submission form and the recent list.

use leptos::*;

use crate::components::{RecentReports, ReportForm};

/// Report page component
#[component]
pub fn Report() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Report an Issue"</h1>
                <p class="text-slate-400 mt-1">
                    "Spotted a leak or an odd reading? Let the community know."
                </p>
            </div>

            <div class="grid lg:grid-cols-2 gap-8">
                <section class="bg-slate-800 rounded-xl p-6 border border-slate-700">
                    <h2 class="text-xl font-semibold mb-4">"New Report"</h2>
                    <ReportForm />
                </section>

                <section>
                    <h2 class="text-xl font-semibold mb-4">"Recent Reports"</h2>
                    <RecentReports />
                </section>
            </div>
        </div>
    }
}
