//! Threshold Evaluation
//!
//! Maps the latest sensor reading onto zero or more alerts. Alerts are
//! recomputed from scratch on every poll and never persisted, so the banner
//! always reflects the most recent reading only.

use crate::state::global::SensorReading;

/// Warning/danger cutoffs for one tiered metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierBounds {
    pub warning: f64,
    pub danger: f64,
}

/// Allowed operating band for pressure. Pressure alerts on leaving the band
/// in either direction and has no warning/danger tiering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureBand {
    pub min: f64,
    pub max: f64,
}

/// Alert thresholds for all three metrics. Fixed at startup, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdConfig {
    pub moisture: TierBounds,
    pub acoustic: TierBounds,
    pub pressure: PressureBand,
}

impl ThresholdConfig {
    /// Production cutoffs: moisture 60/70 %, acoustic 70/75 dB,
    /// pressure 20-80 PSI.
    pub const DEFAULT: ThresholdConfig = ThresholdConfig {
        moisture: TierBounds {
            warning: 60.0,
            danger: 70.0,
        },
        acoustic: TierBounds {
            warning: 70.0,
            danger: 75.0,
        },
        pressure: PressureBand {
            min: 20.0,
            max: 80.0,
        },
    };
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A single threshold breach in the latest reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    MoistureWarning,
    MoistureDanger,
    AcousticWarning,
    AcousticDanger,
    PressureLow,
    PressureHigh,
}

impl Alert {
    /// Human-readable banner text for this alert.
    pub fn message(&self) -> &'static str {
        match self {
            Alert::MoistureWarning => "High moisture level detected!",
            Alert::MoistureDanger => "Critical moisture level detected!",
            Alert::AcousticWarning => "High acoustic level detected!",
            Alert::AcousticDanger => "Critical acoustic level detected!",
            Alert::PressureLow => "Low pressure detected!",
            Alert::PressureHigh => "High pressure detected!",
        }
    }
}

/// Evaluate a reading against the thresholds.
///
/// Metrics are checked in a fixed order (moisture, acoustic, pressure) and
/// independently of each other. A tiered metric reports at most one alert:
/// crossing the danger cutoff suppresses that metric's warning message.
/// All comparisons are strict, so a value sitting exactly on a bound is
/// still considered in range.
pub fn evaluate(reading: &SensorReading, config: &ThresholdConfig) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if reading.moisture > config.moisture.danger {
        alerts.push(Alert::MoistureDanger);
    } else if reading.moisture > config.moisture.warning {
        alerts.push(Alert::MoistureWarning);
    }

    if reading.acoustic > config.acoustic.danger {
        alerts.push(Alert::AcousticDanger);
    } else if reading.acoustic > config.acoustic.warning {
        alerts.push(Alert::AcousticWarning);
    }

    if reading.pressure < config.pressure.min {
        alerts.push(Alert::PressureLow);
    } else if reading.pressure > config.pressure.max {
        alerts.push(Alert::PressureHigh);
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(pressure: f64, moisture: f64, acoustic: f64) -> SensorReading {
        SensorReading {
            pressure,
            moisture,
            acoustic,
            rssi: None,
            timestamp: None,
        }
    }

    #[test]
    fn test_quiet_reading_raises_nothing() {
        let alerts = evaluate(&reading(50.0, 50.0, 50.0), &ThresholdConfig::DEFAULT);
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_critical_moisture_suppresses_warning() {
        let alerts = evaluate(&reading(50.0, 72.0, 50.0), &ThresholdConfig::DEFAULT);
        assert_eq!(alerts, vec![Alert::MoistureDanger]);
        assert_eq!(alerts[0].message(), "Critical moisture level detected!");
        assert!(!alerts.contains(&Alert::MoistureWarning));
    }

    #[test]
    fn test_moisture_between_cutoffs_is_a_warning() {
        let alerts = evaluate(&reading(50.0, 65.0, 50.0), &ThresholdConfig::DEFAULT);
        assert_eq!(alerts, vec![Alert::MoistureWarning]);
    }

    #[test]
    fn test_acoustic_tiers() {
        let warn = evaluate(&reading(50.0, 50.0, 72.0), &ThresholdConfig::DEFAULT);
        assert_eq!(warn, vec![Alert::AcousticWarning]);

        let danger = evaluate(&reading(50.0, 50.0, 80.0), &ThresholdConfig::DEFAULT);
        assert_eq!(danger, vec![Alert::AcousticDanger]);
    }

    #[test]
    fn test_pressure_band_alerts_in_both_directions() {
        let low = evaluate(&reading(15.0, 50.0, 50.0), &ThresholdConfig::DEFAULT);
        assert_eq!(low, vec![Alert::PressureLow]);
        assert_eq!(low[0].message(), "Low pressure detected!");

        let high = evaluate(&reading(85.0, 50.0, 50.0), &ThresholdConfig::DEFAULT);
        assert_eq!(high, vec![Alert::PressureHigh]);
        assert_eq!(high[0].message(), "High pressure detected!");
    }

    #[test]
    fn test_values_exactly_on_a_bound_are_in_range() {
        let alerts = evaluate(&reading(80.0, 60.0, 70.0), &ThresholdConfig::DEFAULT);
        assert!(alerts.is_empty());

        let alerts = evaluate(&reading(20.0, 50.0, 50.0), &ThresholdConfig::DEFAULT);
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_metrics_report_in_fixed_order() {
        let alerts = evaluate(&reading(15.0, 72.0, 80.0), &ThresholdConfig::DEFAULT);
        assert_eq!(
            alerts,
            vec![Alert::MoistureDanger, Alert::AcousticDanger, Alert::PressureLow]
        );
    }
}
