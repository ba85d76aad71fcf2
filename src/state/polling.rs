//! Polling Loops
//!
//! Two fixed-interval cycles drive the dashboard: a fast one for the latest
//! reading plus statistics, and a slower one for the chart series. A failed
//! fetch is not retried within its cycle; the next scheduled tick is the
//! retry. Each cycle owns a [`RequestSequencer`] so a slow response cannot
//! overwrite a newer one.
//!
//! [`RequestSequencer`]: crate::state::sequence::RequestSequencer

use gloo_timers::callback::Interval;
use leptos::*;

use crate::api;
use crate::series::MAX_CHART_POINTS;
use crate::state::global::{ConnectionStatus, GlobalState, DEFAULT_TIME_RANGE_HOURS};

/// Fast cycle period: latest reading and statistics.
pub const UPDATE_INTERVAL_MS: u32 = 5_000;

/// Slow cycle period: chart series.
pub const CHART_UPDATE_INTERVAL_MS: u32 = 10_000;

/// Kick off both polling cycles. Each runs once immediately, then on its
/// interval for the life of the page, so the `Interval` handles are leaked.
pub fn start_polling(state: &GlobalState) {
    refresh_latest(state.clone());
    refresh_chart(state.clone());

    let state_for_fast = state.clone();
    Interval::new(UPDATE_INTERVAL_MS, move || {
        refresh_latest(state_for_fast.clone());
    })
    .forget();

    let state_for_chart = state.clone();
    Interval::new(CHART_UPDATE_INTERVAL_MS, move || {
        refresh_chart(state_for_chart.clone());
    })
    .forget();
}

/// One fast-cycle pass: the latest reading, then the 24-hour statistics.
/// Both updates carry the same token, so a pass that has been superseded
/// applies neither.
pub fn refresh_latest(state: GlobalState) {
    let token = state.latest_seq.begin();

    spawn_local(async move {
        let reading = match api::fetch_latest().await {
            Ok(reading) => reading,
            Err(e) => {
                web_sys::console::error_1(&format!("Error fetching latest data: {}", e).into());
                if state.latest_seq.is_current(token) {
                    state.connection.set(ConnectionStatus::ConnectionError);
                }
                return;
            }
        };

        if !state.latest_seq.commit(token) {
            return;
        }
        state.apply_reading(reading);

        match api::fetch_statistics(DEFAULT_TIME_RANGE_HOURS).await {
            // An empty window reports zero readings; keep whatever the
            // panel currently shows instead of blanking it.
            Ok(stats) if stats.total_readings > 0 => {
                if state.latest_seq.is_current(token) {
                    state.stats.set(Some(stats));
                }
            }
            Ok(_) => {}
            Err(e) => {
                web_sys::console::error_1(&format!("Error fetching statistics: {}", e).into());
            }
        }
    });
}

/// One chart pass for the currently selected window. The response is
/// decimated before it replaces the series wholesale. Chart failures only
/// log; the connection indicator follows the fast cycle.
pub fn refresh_chart(state: GlobalState) {
    let token = state.chart_seq.begin();
    let hours = state.time_range_hours.get_untracked();

    spawn_local(async move {
        match api::fetch_chart_data(hours).await {
            Ok(series) => {
                if state.chart_seq.commit(token) {
                    state.chart.set(series.decimate(MAX_CHART_POINTS));
                }
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Error fetching chart data: {}", e).into());
            }
        }
        state.loading.set(false);
    });
}
