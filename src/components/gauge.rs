//! Gauge Components
//!
//! Semicircular gauges for the three sensor metrics, drawn on HTML5
//! Canvas. Each gauge normalizes its reading into a 0-100 arc fill and
//! picks a color tier from the raw value.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::alerts::ThresholdConfig;
use crate::format::fmt_opt;
use crate::state::global::{GlobalState, SensorReading, SensorStats};

/// Arc track behind the fill.
const TRACK_COLOR: &str = "rgba(51, 65, 85, 0.3)";

/// Identifies one of the three dashboard gauges, with its scale and colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GaugeKind {
    Pressure,
    Moisture,
    Acoustic,
}

impl GaugeKind {
    pub fn title(&self) -> &'static str {
        match self {
            GaugeKind::Pressure => "Pressure",
            GaugeKind::Moisture => "Moisture",
            GaugeKind::Acoustic => "Acoustic",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            GaugeKind::Pressure => "PSI",
            GaugeKind::Moisture => "%",
            GaugeKind::Acoustic => "dB",
        }
    }

    /// Full-scale range of the gauge arc.
    pub fn range(&self) -> (f64, f64) {
        match self {
            GaugeKind::Pressure => (0.0, 100.0),
            GaugeKind::Moisture => (0.0, 100.0),
            GaugeKind::Acoustic => (30.0, 100.0),
        }
    }

    /// Arc color for a raw reading. Moisture and acoustic shift to amber
    /// past their warning cutoff and red past danger; pressure keeps its
    /// base color regardless of value.
    pub fn color_for(&self, value: f64) -> &'static str {
        let thresholds = ThresholdConfig::DEFAULT;
        match self {
            GaugeKind::Pressure => "rgba(59, 130, 246, 0.8)",
            GaugeKind::Moisture => {
                if value > thresholds.moisture.danger {
                    "rgba(239, 68, 68, 0.8)"
                } else if value > thresholds.moisture.warning {
                    "rgba(245, 158, 11, 0.8)"
                } else {
                    "rgba(6, 182, 212, 0.8)"
                }
            }
            GaugeKind::Acoustic => {
                if value > thresholds.acoustic.danger {
                    "rgba(239, 68, 68, 0.8)"
                } else if value > thresholds.acoustic.warning {
                    "rgba(245, 158, 11, 0.8)"
                } else {
                    "rgba(139, 92, 246, 0.8)"
                }
            }
        }
    }

    /// This gauge's value from a reading.
    pub fn value_of(&self, reading: &SensorReading) -> f64 {
        match self {
            GaugeKind::Pressure => reading.pressure,
            GaugeKind::Moisture => reading.moisture,
            GaugeKind::Acoustic => reading.acoustic,
        }
    }

    /// This gauge's (min, avg, max) aggregates from the statistics window.
    pub fn stats_of(&self, stats: &SensorStats) -> (Option<f64>, Option<f64>, Option<f64>) {
        match self {
            GaugeKind::Pressure => (stats.min_pressure, stats.avg_pressure, stats.max_pressure),
            GaugeKind::Moisture => (stats.min_moisture, stats.avg_moisture, stats.max_moisture),
            GaugeKind::Acoustic => (stats.min_acoustic, stats.avg_acoustic, stats.max_acoustic),
        }
    }
}

/// Fraction of the arc to fill, as a percentage clamped to [0, 100].
/// Out-of-range readings pin the needle instead of wrapping the arc.
pub fn gauge_fill(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range <= 0.0 {
        return 0.0;
    }
    (((value - min) / range) * 100.0).clamp(0.0, 100.0)
}

/// One sensor card: title, gauge arc, current value and the min/avg/max
/// row from the 24-hour statistics.
#[component]
pub fn SensorCard(kind: GaugeKind) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let latest = state.latest;
    let stats = state.stats;

    let value_text = move || {
        latest
            .get()
            .map(|reading| format!("{:.1}", kind.value_of(&reading)))
            .unwrap_or_else(|| "--".to_string())
    };

    let stat_row = move |pick: fn((Option<f64>, Option<f64>, Option<f64>)) -> Option<f64>| {
        fmt_opt(stats.get().as_ref().map(|s| kind.stats_of(s)).and_then(pick))
    };

    view! {
        <div class="bg-slate-800 rounded-xl p-6 border border-slate-700">
            <div class="flex items-center justify-between mb-2">
                <h3 class="font-semibold text-slate-200">{kind.title()}</h3>
                <span class="text-xs text-slate-400">{kind.unit()}</span>
            </div>

            <Gauge kind=kind />

            <div class="text-center -mt-8 mb-4">
                <span class="text-3xl font-bold">{value_text}</span>
                <span class="text-sm text-slate-400 ml-1">{kind.unit()}</span>
            </div>

            <div class="grid grid-cols-3 gap-2 text-center text-sm border-t border-slate-700 pt-3">
                <div>
                    <div class="text-slate-400 text-xs">"Min"</div>
                    <div>{move || stat_row(|(min, _, _)| min)}</div>
                </div>
                <div>
                    <div class="text-slate-400 text-xs">"Avg"</div>
                    <div>{move || stat_row(|(_, avg, _)| avg)}</div>
                </div>
                <div>
                    <div class="text-slate-400 text-xs">"Max"</div>
                    <div>{move || stat_row(|(_, _, max)| max)}</div>
                </div>
            </div>
        </div>
    }
}

/// The gauge arc itself. Redraws whenever the latest reading changes.
#[component]
pub fn Gauge(kind: GaugeKind) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    let latest = state.latest;
    create_effect(move |_| {
        let reading = latest.get();

        if let Some(canvas) = canvas_ref.get() {
            let value = reading.as_ref().map(|r| kind.value_of(r));
            draw_gauge(&canvas, kind, value);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="200"
            height="120"
            class="w-full h-28"
        />
    }
}

/// Draw the semicircular gauge: a muted track over the full sweep and a
/// colored fill proportional to the reading.
fn draw_gauge(canvas: &HtmlCanvasElement, kind: GaugeKind, value: Option<f64>) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    let cx = width / 2.0;
    let cy = height - 10.0;
    let radius = cy - 14.0;
    let thickness = radius * 0.25;

    ctx.set_line_width(thickness);

    // Track: full semicircle from left to right over the top.
    ctx.set_stroke_style(&TRACK_COLOR.into());
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, radius, std::f64::consts::PI, 2.0 * std::f64::consts::PI);
    ctx.stroke();

    let value = match value {
        Some(v) => v,
        None => return,
    };

    let (min, max) = kind.range();
    let fill = gauge_fill(value, min, max);
    if fill <= 0.0 {
        return;
    }

    let sweep = std::f64::consts::PI * (fill / 100.0);
    ctx.set_stroke_style(&kind.color_for(value).into());
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, radius, std::f64::consts::PI, std::f64::consts::PI + sweep);
    ctx.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_fill_in_range() {
        assert_eq!(gauge_fill(50.0, 0.0, 100.0), 50.0);
        assert_eq!(gauge_fill(65.0, 30.0, 100.0), 50.0);
        assert_eq!(gauge_fill(0.0, 0.0, 100.0), 0.0);
        assert_eq!(gauge_fill(100.0, 0.0, 100.0), 100.0);
    }

    #[test]
    fn test_gauge_fill_clamps_out_of_range() {
        assert_eq!(gauge_fill(120.0, 0.0, 100.0), 100.0);
        assert_eq!(gauge_fill(-5.0, 0.0, 100.0), 0.0);
        assert_eq!(gauge_fill(10.0, 30.0, 100.0), 0.0);
    }

    #[test]
    fn test_gauge_fill_degenerate_range() {
        assert_eq!(gauge_fill(50.0, 100.0, 100.0), 0.0);
        assert_eq!(gauge_fill(50.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn test_moisture_colors_follow_thresholds() {
        let kind = GaugeKind::Moisture;
        assert_eq!(kind.color_for(45.0), "rgba(6, 182, 212, 0.8)");
        assert_eq!(kind.color_for(60.0), "rgba(6, 182, 212, 0.8)");
        assert_eq!(kind.color_for(65.0), "rgba(245, 158, 11, 0.8)");
        assert_eq!(kind.color_for(70.0), "rgba(245, 158, 11, 0.8)");
        assert_eq!(kind.color_for(72.0), "rgba(239, 68, 68, 0.8)");
    }

    #[test]
    fn test_acoustic_colors_follow_thresholds() {
        let kind = GaugeKind::Acoustic;
        assert_eq!(kind.color_for(50.0), "rgba(139, 92, 246, 0.8)");
        assert_eq!(kind.color_for(72.0), "rgba(245, 158, 11, 0.8)");
        assert_eq!(kind.color_for(80.0), "rgba(239, 68, 68, 0.8)");
    }

    #[test]
    fn test_pressure_color_is_static() {
        let kind = GaugeKind::Pressure;
        assert_eq!(kind.color_for(10.0), kind.color_for(90.0));
    }

    #[test]
    fn test_kind_selects_reading_field() {
        let reading = SensorReading {
            pressure: 55.0,
            moisture: 31.5,
            acoustic: 48.0,
            rssi: None,
            timestamp: None,
        };

        assert_eq!(GaugeKind::Pressure.value_of(&reading), 55.0);
        assert_eq!(GaugeKind::Moisture.value_of(&reading), 31.5);
        assert_eq!(GaugeKind::Acoustic.value_of(&reading), 48.0);
    }
}
