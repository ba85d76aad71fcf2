//! Recent Reports Component
//!
//! Newest-first list of community reports, capped at the recent limit.

use leptos::*;

use crate::format::time_ago_label;
use crate::state::global::GlobalState;
use crate::storage::{Report, Severity, RECENT_REPORT_LIMIT};

/// List of the most recent reports
#[component]
pub fn RecentReports() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let reports = state.reports;

    view! {
        <div class="space-y-3">
            {move || {
                let log = reports.get();
                let recent = log.recent(RECENT_REPORT_LIMIT);

                if recent.is_empty() {
                    view! {
                        <p class="text-center text-slate-400 py-10">
                            "No reports yet. Be the first to report an issue!"
                        </p>
                    }
                    .into_view()
                } else {
                    recent
                        .iter()
                        .cloned()
                        .map(|report| view! { <ReportItem report=report /> })
                        .collect_view()
                }
            }}
        </div>
    }
}

/// Single report card
#[component]
fn ReportItem(report: Report) -> impl IntoView {
    let time_ago = time_ago_label(Some(report.timestamp.as_str()), chrono::Utc::now());
    let severity_class = format!(
        "px-2 py-1 rounded text-xs font-semibold {}",
        severity_pill(report.severity)
    );

    view! {
        <div class="bg-slate-800 rounded-xl p-4 border border-slate-700">
            <div class="flex items-start justify-between">
                <div>
                    <div class="font-medium">{report.issue_type.label()}</div>
                    <div class="text-sm text-slate-400 mt-1">
                        {format!("📍 {}", report.location)}
                    </div>
                </div>
                <div class="text-sm text-slate-500">{time_ago}</div>
            </div>
            <p class="my-3 text-sm text-slate-300">{report.description.clone()}</p>
            <div class="flex items-center justify-between">
                <span class=severity_class>{report.severity.to_string()}</span>
                <span class="text-xs text-slate-400">
                    {format!("Reported by: {}", report.reporter_name)}
                </span>
            </div>
        </div>
    }
}

/// Pill colors per severity tier
fn severity_pill(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "bg-blue-500/20 text-blue-300",
        Severity::Medium => "bg-yellow-500/20 text-yellow-300",
        Severity::High => "bg-orange-500/20 text-orange-300",
        Severity::Critical => "bg-red-500/20 text-red-300",
        Severity::Unknown => "bg-slate-500/20 text-slate-300",
    }
}
