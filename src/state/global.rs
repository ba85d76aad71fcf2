//! Global Application State
//!
//! Reactive state management using Leptos signals. One instance is provided
//! at the root and shared by every page; the polling loops write into it and
//! components subscribe to the pieces they render.

use leptos::*;
use std::rc::Rc;

use crate::alerts::{self, Alert, ThresholdConfig};
use crate::series::ChartSeries;
use crate::state::sequence::RequestSequencer;
use crate::storage::ReportLog;

/// Default chart window in hours.
pub const DEFAULT_TIME_RANGE_HOURS: u32 = 24;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Most recent sensor reading, absent until the first successful poll
    pub latest: RwSignal<Option<SensorReading>>,
    /// Aggregate statistics over the last 24 hours
    pub stats: RwSignal<Option<SensorStats>>,
    /// Chart series for the selected window, already decimated
    pub chart: RwSignal<ChartSeries>,
    /// Alerts computed from the latest reading
    pub alerts: RwSignal<Vec<Alert>>,
    /// Whether the user dismissed the banner; reset by alert-raising polls
    pub banner_dismissed: RwSignal<bool>,
    /// Connection indicator state
    pub connection: RwSignal<ConnectionStatus>,
    /// Selected chart window in hours
    pub time_range_hours: RwSignal<u32>,
    /// "Xs ago" text for the latest reading, refreshed each poll
    pub last_update: RwSignal<Option<String>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Issue report log mirrored from localStorage
    pub reports: RwSignal<ReportLog>,
    /// Sequencer for the latest/statistics cycle
    pub latest_seq: Rc<RequestSequencer>,
    /// Sequencer for chart fetches
    pub chart_seq: Rc<RequestSequencer>,
}

/// One sensor reading from the API. Parsing is strict for the three metric
/// values; a response missing any of them counts as a failed fetch.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct SensorReading {
    pub pressure: f64,
    pub moisture: f64,
    pub acoustic: f64,
    #[serde(default)]
    pub rssi: Option<i32>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl SensorReading {
    /// `-62 dBm (Excellent)` style label, absent when the reading carries
    /// no signal strength.
    pub fn signal_label(&self) -> Option<String> {
        self.rssi
            .map(|rssi| format!("{} dBm ({})", rssi, signal_quality(rssi)))
    }
}

/// RSSI quality tier shown beside the raw dBm value.
pub fn signal_quality(rssi: i32) -> &'static str {
    if rssi < -100 {
        "Poor"
    } else if rssi < -90 {
        "Fair"
    } else if rssi < -80 {
        "Good"
    } else {
        "Excellent"
    }
}

/// Min/avg/max aggregates from the statistics endpoint. Every field is
/// optional so a sparse window still renders, with `--` placeholders.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SensorStats {
    pub total_readings: u64,
    pub min_pressure: Option<f64>,
    pub avg_pressure: Option<f64>,
    pub max_pressure: Option<f64>,
    pub min_moisture: Option<f64>,
    pub avg_moisture: Option<f64>,
    pub max_moisture: Option<f64>,
    pub min_acoustic: Option<f64>,
    pub avg_acoustic: Option<f64>,
    pub max_acoustic: Option<f64>,
}

/// Connection indicator state, derived from the most recent fetch outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// Startup state before the health check resolves
    #[default]
    Connecting,
    Connected,
    /// Health endpoint answered but did not report healthy
    Disconnected,
    /// A fetch failed outright
    ConnectionError,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Disconnected => "Disconnected",
            ConnectionStatus::ConnectionError => "Connection Error",
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        latest: create_rw_signal(None),
        stats: create_rw_signal(None),
        chart: create_rw_signal(ChartSeries::default()),
        alerts: create_rw_signal(Vec::new()),
        banner_dismissed: create_rw_signal(false),
        connection: create_rw_signal(ConnectionStatus::Connecting),
        time_range_hours: create_rw_signal(DEFAULT_TIME_RANGE_HOURS),
        last_update: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        reports: create_rw_signal(crate::storage::load_report_log()),
        latest_seq: Rc::new(RequestSequencer::new()),
        chart_seq: Rc::new(RequestSequencer::new()),
    };

    provide_context(state);
}

impl GlobalState {
    /// Apply a freshly fetched reading: update the displays and recompute
    /// alerts. Any poll that raises alerts reopens a dismissed banner.
    pub fn apply_reading(&self, reading: SensorReading) {
        let alerts = alerts::evaluate(&reading, &ThresholdConfig::DEFAULT);
        if !alerts.is_empty() {
            self.banner_dismissed.set(false);
        }
        self.alerts.set(alerts);

        self.last_update.set(Some(crate::format::time_ago_label(
            reading.timestamp.as_deref(),
            chrono::Utc::now(),
        )));
        self.latest.set(Some(reading));
        self.connection.set(ConnectionStatus::Connected);
    }

    /// Number of alerts raised by the latest reading.
    pub fn active_alerts(&self) -> usize {
        self.alerts.get().len()
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_quality_tiers() {
        assert_eq!(signal_quality(-110), "Poor");
        assert_eq!(signal_quality(-95), "Fair");
        assert_eq!(signal_quality(-85), "Good");
        assert_eq!(signal_quality(-62), "Excellent");
        assert_eq!(signal_quality(-100), "Fair");
        assert_eq!(signal_quality(-80), "Excellent");
    }

    #[test]
    fn test_reading_parses_backend_shape() {
        let json = r#"{
            "id": 42,
            "pressure": 55.2,
            "moisture": 31.0,
            "acoustic": 48.7,
            "rssi": -71,
            "timestamp": "2026-08-25T09:15:00"
        }"#;
        let reading: SensorReading = serde_json::from_str(json).unwrap();

        assert_eq!(reading.pressure, 55.2);
        assert_eq!(reading.rssi, Some(-71));
        assert_eq!(reading.signal_label().unwrap(), "-71 dBm (Excellent)");
    }

    #[test]
    fn test_reading_without_signal() {
        let json = r#"{"pressure": 50.0, "moisture": 30.0, "acoustic": 45.0, "rssi": null}"#;
        let reading: SensorReading = serde_json::from_str(json).unwrap();

        assert_eq!(reading.rssi, None);
        assert_eq!(reading.signal_label(), None);
        assert_eq!(reading.timestamp, None);
    }

    #[test]
    fn test_reading_requires_metric_values() {
        let json = r#"{"moisture": 30.0, "acoustic": 45.0}"#;
        assert!(serde_json::from_str::<SensorReading>(json).is_err());
    }

    #[test]
    fn test_stats_tolerate_missing_fields() {
        let json = r#"{"total_readings": 120, "avg_pressure": 52.5}"#;
        let stats: SensorStats = serde_json::from_str(json).unwrap();

        assert_eq!(stats.total_readings, 120);
        assert_eq!(stats.avg_pressure, Some(52.5));
        assert_eq!(stats.min_moisture, None);

        let empty: SensorStats = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.total_readings, 0);
    }

    #[test]
    fn test_connection_status_labels() {
        assert_eq!(ConnectionStatus::default().label(), "Connecting...");
        assert_eq!(ConnectionStatus::Connected.label(), "Connected");
        assert_eq!(ConnectionStatus::Disconnected.label(), "Disconnected");
        assert_eq!(ConnectionStatus::ConnectionError.label(), "Connection Error");
        assert!(ConnectionStatus::Connected.is_connected());
        assert!(!ConnectionStatus::ConnectionError.is_connected());
    }
}
