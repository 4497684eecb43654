//! Chart Components
//!
//! Category pie and enrollment-trend bars drawn on an HTML5 Canvas.

use health_hub::query::Histogram;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Slice and bar colors, cycled
const CHART_COLORS: [&str; 4] = ["#1aa7ec", "#ff6f61", "#a3e4d7", "#2d3748"];

fn color(idx: usize) -> &'static str {
    CHART_COLORS[idx % CHART_COLORS.len()]
}

/// Pie chart of a histogram, with a legend
#[component]
pub fn PieChart(
    #[prop(into)]
    data: Signal<Histogram>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let histogram = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &histogram);
        }
    });

    view! {
        <div>
            <canvas node_ref=canvas_ref width="400" height="300" class="w-full h-64" />
            <Legend data=data />
        </div>
    }
}

/// Vertical bar chart of a histogram
#[component]
pub fn BarChart(
    #[prop(into)]
    data: Signal<Histogram>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let histogram = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &histogram);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width="600" height="300" class="w-full h-64" />
    }
}

#[component]
fn Legend(data: Signal<Histogram>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                data.get()
                    .entries()
                    .iter()
                    .enumerate()
                    .map(|(idx, (label, count))| {
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color(idx))
                                />
                                <span class="text-sm text-gray-600">
                                    {format!("{} ({})", label, count)}
                                </span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_empty(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("16px sans-serif");
    ctx.set_text_align("center");
    let _ = ctx.fill_text("No data yet", width / 2.0, height / 2.0);
}

fn draw_pie(canvas: &HtmlCanvasElement, histogram: &Histogram) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    let total = histogram.total();
    if total == 0 {
        draw_empty(&ctx, width, height);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0) - 10.0;

    // Start at twelve o'clock
    let mut angle = -std::f64::consts::FRAC_PI_2;
    for (idx, (_, count)) in histogram.entries().iter().enumerate() {
        let sweep = (*count as f64 / total as f64) * std::f64::consts::TAU;
        ctx.set_fill_style(&color(idx).into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, angle, angle + sweep);
        ctx.close_path();
        ctx.fill();
        angle += sweep;
    }
}

fn draw_bars(canvas: &HtmlCanvasElement, histogram: &Histogram) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    if histogram.is_empty() {
        draw_empty(&ctx, width, height);
        return;
    }

    // Margins
    let margin_left = 40.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;
    let max = histogram.max_count().max(1) as f64;

    // Axis and y labels
    ctx.set_stroke_style(&"#d1d5db".into()); // gray-300
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 4.0) * max;
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_text_align("right");
        let _ = ctx.fill_text(&format!("{:.0}", value), margin_left - 6.0, y + 4.0);
    }

    let slot = chart_width / histogram.len() as f64;
    let bar_width = slot * 0.6;
    ctx.set_text_align("center");

    for (idx, (label, count)) in histogram.entries().iter().enumerate() {
        let bar_height = (*count as f64 / max) * chart_height;
        let x = margin_left + idx as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&color(idx).into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        ctx.set_fill_style(&"#374151".into());
        let _ = ctx.fill_text(label, x + bar_width / 2.0, height - 15.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_cycle() {
        assert_eq!(color(0), "#1aa7ec");
        assert_eq!(color(3), "#2d3748");
        assert_eq!(color(4), color(0));
    }
}
