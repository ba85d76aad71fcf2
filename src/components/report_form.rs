//! Report Form Component
//!
//! Form for filing a new issue report. Reports never leave the browser:
//! submission prepends to the localStorage log and updates the shared
//! signal, which refreshes the recent list and leaderboard.

use leptos::*;

use crate::state::global::GlobalState;
use crate::storage::{self, IssueType, Report, Severity};

/// Issue report form
#[component]
pub fn ReportForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (issue_type, set_issue_type) = create_signal(IssueType::Leak.value().to_string());
    let (severity, set_severity) = create_signal(Severity::Low.value().to_string());
    let (location, set_location) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (reporter_name, set_reporter_name) = create_signal(String::new());
    let (reporter_contact, set_reporter_contact) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let report = Report {
            issue_type: IssueType::from_value(&issue_type.get()),
            location: location.get(),
            severity: Severity::from_value(&severity.get()),
            description: description.get(),
            reporter_name: reporter_name.get(),
            reporter_contact: reporter_contact.get(),
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        };

        state.reports.update(|log| log.submit(report));
        storage::save_report_log(&state.reports.get_untracked());

        state.show_success(
            "Report submitted successfully! Thank you for helping keep our system safe.",
        );

        // Reset form
        set_issue_type.set(IssueType::Leak.value().to_string());
        set_severity.set(Severity::Low.value().to_string());
        set_location.set(String::new());
        set_description.set(String::new());
        set_reporter_name.set(String::new());
        set_reporter_contact.set(String::new());
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div class="grid md:grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-slate-400 mb-2">"Issue Type"</label>
                    <select
                        on:change=move |ev| set_issue_type.set(event_target_value(&ev))
                        prop:value=move || issue_type.get()
                        class="w-full bg-slate-700 rounded-lg px-4 py-3 text-white
                               border border-slate-600 focus:border-blue-500 focus:outline-none"
                    >
                        {IssueType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.value()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div>
                    <label class="block text-sm text-slate-400 mb-2">"Severity"</label>
                    <select
                        on:change=move |ev| set_severity.set(event_target_value(&ev))
                        prop:value=move || severity.get()
                        class="w-full bg-slate-700 rounded-lg px-4 py-3 text-white
                               border border-slate-600 focus:border-blue-500 focus:outline-none"
                    >
                        {Severity::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.value()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div>
                <label class="block text-sm text-slate-400 mb-2">"Location"</label>
                <input
                    type="text"
                    required
                    placeholder="Building, floor, or pipe segment"
                    prop:value=move || location.get()
                    on:input=move |ev| set_location.set(event_target_value(&ev))
                    class="w-full bg-slate-700 rounded-lg px-4 py-3 text-white
                           border border-slate-600 focus:border-blue-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-slate-400 mb-2">"Description"</label>
                <textarea
                    required
                    rows="3"
                    placeholder="What did you notice?"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                    class="w-full bg-slate-700 rounded-lg px-4 py-3 text-white
                           border border-slate-600 focus:border-blue-500 focus:outline-none"
                />
            </div>

            <div class="grid md:grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-slate-400 mb-2">"Your Name"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || reporter_name.get()
                        on:input=move |ev| set_reporter_name.set(event_target_value(&ev))
                        class="w-full bg-slate-700 rounded-lg px-4 py-3 text-white
                               border border-slate-600 focus:border-blue-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-slate-400 mb-2">"Contact (optional)"</label>
                    <input
                        type="text"
                        placeholder="Email or phone"
                        prop:value=move || reporter_contact.get()
                        on:input=move |ev| set_reporter_contact.set(event_target_value(&ev))
                        class="w-full bg-slate-700 rounded-lg px-4 py-3 text-white
                               border border-slate-600 focus:border-blue-500 focus:outline-none"
                    />
                </div>
            </div>

            <button
                type="submit"
                class="w-full bg-blue-600 hover:bg-blue-700 rounded-lg py-3 font-semibold
                       transition-colors"
            >
                "Submit Report"
            </button>
        </form>
    }
}
