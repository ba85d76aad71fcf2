//! Chart Component
//!
//! Time-series chart for all three metrics using HTML5 Canvas. The series
//! arrives pre-decimated from the polling loop and is drawn wholesale on
//! every change.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::series::ChartSeries;
use crate::state::global::GlobalState;
use crate::state::polling::refresh_chart;

/// Line colors per metric, in draw order.
const SERIES_COLORS: [(&str, &str); 3] = [
    ("Pressure (PSI)", "rgba(59, 130, 246, 1)"),
    ("Moisture (%)", "rgba(6, 182, 212, 1)"),
    ("Acoustic (dB)", "rgba(139, 92, 246, 1)"),
];

/// Most x-axis labels drawn before thinning kicks in.
const MAX_X_TICKS: usize = 10;

/// Sensor history chart with range selection
#[component]
pub fn SensorChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever a new series lands
    let chart = state.chart;
    create_effect(move |_| {
        let series = chart.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &series);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="360"
                class="w-full h-64 md:h-80 rounded-lg"
            />

            <ChartLegend />

            <div class="flex justify-center space-x-2 mt-4">
                <RangeButton label="1H" hours=1 />
                <RangeButton label="6H" hours=6 />
                <RangeButton label="12H" hours=12 />
                <RangeButton label="24H" hours=24 />
            </div>
        </div>
    }
}

/// Legend naming the three series
#[component]
fn ChartLegend() -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {SERIES_COLORS
                .into_iter()
                .map(|(label, color)| {
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-slate-300">{label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Chart window selection button
#[component]
fn RangeButton(label: &'static str, hours: u32) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let time_range_hours = state.time_range_hours;
    let is_active = create_memo(move |_| time_range_hours.get() == hours);

    let state_for_click = state;
    let on_click = move |_| {
        state_for_click.time_range_hours.set(hours);
        state_for_click.loading.set(true);
        // Fetch the new window right away instead of waiting for the
        // next slow tick; the sequencer drops whichever response loses.
        refresh_chart(state_for_click.clone());
    };

    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-blue-600 text-white", base)
                } else {
                    format!("{} bg-slate-700 text-slate-300 hover:bg-slate-600", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, series: &ChartSeries) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 46.0;
    let margin_right = 16.0;
    let margin_top = 16.0;
    let margin_bottom = 34.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1e293b".into()); // slate-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if series.is_empty() {
        ctx.set_fill_style(&"#64748b".into()); // slate-500
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data for selected range", width / 2.0 - 90.0, height / 2.0);
        return;
    }

    // Shared y-scale across all three metrics
    let mut global_min = f64::INFINITY;
    let mut global_max = f64::NEG_INFINITY;

    for values in [&series.pressure, &series.moisture, &series.acoustic] {
        for &value in values.iter() {
            global_min = global_min.min(value);
            global_max = global_max.max(value);
        }
    }

    // Add padding to y range
    let y_range = global_max - global_min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    global_min -= y_padding;
    global_max += y_padding;

    // Grid lines and y-axis labels
    ctx.set_stroke_style(&"rgba(51, 65, 85, 0.5)".into());
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = global_max - (i as f64 / 5.0) * (global_max - global_min);
        ctx.set_fill_style(&"#94a3b8".into()); // slate-400
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 4.0, y + 4.0);
    }

    // Draw each series
    let count = series.len();
    for (idx, values) in [&series.pressure, &series.moisture, &series.acoustic]
        .into_iter()
        .enumerate()
    {
        if values.is_empty() {
            continue;
        }

        let (_, color) = SERIES_COLORS[idx];
        ctx.set_stroke_style(&color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();

        for (i, &value) in values.iter().enumerate() {
            let x = if count > 1 {
                margin_left + (i as f64 / (count - 1) as f64) * chart_width
            } else {
                margin_left + chart_width / 2.0
            };
            let y = margin_top
                + ((global_max - value) / (global_max - global_min)) * chart_height;

            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }

        ctx.stroke();
    }

    // X-axis labels, thinned to a bounded number of ticks
    ctx.set_fill_style(&"#94a3b8".into());
    ctx.set_font("11px sans-serif");

    let tick_step = count.div_ceil(MAX_X_TICKS).max(1);
    for (i, label) in series.labels.iter().enumerate() {
        if i % tick_step != 0 {
            continue;
        }
        let x = if count > 1 {
            margin_left + (i as f64 / (count - 1) as f64) * chart_width
        } else {
            margin_left + chart_width / 2.0
        };
        let _ = ctx.fill_text(label, x - 14.0, height - 10.0);
    }
}
