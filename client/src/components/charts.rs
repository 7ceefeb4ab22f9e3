//! Lightweight inline-SVG charts for the dashboard pages.
//!
//! DESIGN
//! ======
//! Geometry is computed by plain functions over `f64` slices so layout can be
//! unit tested without a DOM; the components only stitch the results into
//! `<svg>` markup. All charts draw into a fixed `VIEW_W x VIEW_H` viewBox and
//! scale with CSS.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use std::f64::consts::PI;
use std::fmt::Write;

use leptos::prelude::*;

pub const VIEW_W: f64 = 400.0;
pub const VIEW_H: f64 = 200.0;
const PAD: f64 = 24.0;

/// One labelled value on a category axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: f64,
}

/// One pie segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieSegment {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// Axis-aligned bar rectangle in viewBox coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// X coordinate of the `index`th of `count` evenly spaced points.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn x_at(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return VIEW_W / 2.0;
    }
    PAD + (VIEW_W - 2.0 * PAD) * index as f64 / (count - 1) as f64
}

/// Y coordinate of `value` on a `[min, max]` axis. Values outside the range
/// are clamped to the plot edges.
#[must_use]
pub fn y_at(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    let t = if span > 0.0 { ((value - min) / span).clamp(0.0, 1.0) } else { 0.5 };
    VIEW_H - PAD - (VIEW_H - 2.0 * PAD) * t
}

/// SVG `points` attribute for a polyline through `values`.
#[must_use]
pub fn polyline_points(values: &[f64], min: f64, max: f64) -> String {
    let mut out = String::new();
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:.1},{:.1}", x_at(i, values.len()), y_at(*v, min, max));
    }
    out
}

/// Closed path for the area under `values`, down to the plot baseline.
#[must_use]
pub fn area_path(values: &[f64], min: f64, max: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let base = VIEW_H - PAD;
    let n = values.len();
    let mut out = format!("M{:.1},{base:.1}", x_at(0, n));
    for (i, v) in values.iter().enumerate() {
        let _ = write!(out, " L{:.1},{:.1}", x_at(i, n), y_at(*v, min, max));
    }
    let _ = write!(out, " L{:.1},{base:.1} Z", x_at(n - 1, n));
    out
}

/// Bars for `values` on a `[0, max]` axis, one slot per value with a 20% gap.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bar_rects(values: &[f64], max: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let slot = (VIEW_W - 2.0 * PAD) / values.len() as f64;
    let width = slot * 0.8;
    let base = VIEW_H - PAD;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let top = y_at(*v, 0.0, max);
            BarRect { x: PAD + slot * i as f64 + (slot - width) / 2.0, y: top, width, height: base - top }
        })
        .collect()
}

/// Start/end angles (radians, clockwise from 12 o'clock) for each segment.
/// Non-positive totals yield no slices.
#[must_use]
pub fn pie_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    values
        .iter()
        .map(|v| {
            let sweep = v.max(0.0) / total * 2.0 * PI;
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

/// SVG arc path for a pie slice centred in the viewBox.
#[must_use]
pub fn slice_path(start: f64, end: f64, radius: f64) -> String {
    let (cx, cy) = (VIEW_W / 2.0, VIEW_H / 2.0);
    let point = |a: f64| (cx + radius * a.sin(), cy - radius * a.cos());
    // A full circle collapses to a zero-length arc; draw it as two halves.
    if end - start >= 2.0 * PI - 1e-9 {
        let (x0, y0) = point(0.0);
        let (x1, y1) = point(PI);
        return format!(
            "M{x0:.1},{y0:.1} A{radius:.1},{radius:.1} 0 1 1 {x1:.1},{y1:.1} A{radius:.1},{radius:.1} 0 1 1 {x0:.1},{y0:.1} Z"
        );
    }
    let (x0, y0) = point(start);
    let (x1, y1) = point(end);
    let large = i32::from(end - start > PI);
    format!("M{cx:.1},{cy:.1} L{x0:.1},{y0:.1} A{radius:.1},{radius:.1} 0 {large} 1 {x1:.1},{y1:.1} Z")
}

fn values_of(data: &[ChartPoint]) -> Vec<f64> {
    data.iter().map(|p| p.value).collect()
}

fn x_labels(data: &'static [ChartPoint]) -> impl IntoView {
    let n = data.len();
    data.iter()
        .enumerate()
        .map(|(i, p)| {
            view! {
                <text class="chart__label" x=format!("{:.1}", x_at(i, n)) y=format!("{:.1}", VIEW_H - 6.0) text-anchor="middle">
                    {p.label}
                </text>
            }
        })
        .collect_view()
}

fn grid_lines() -> impl IntoView {
    (0..=4)
        .map(|i| {
            let y = format!("{:.1}", PAD + (VIEW_H - 2.0 * PAD) * f64::from(i) / 4.0);
            view! { <line class="chart__grid" x1=PAD.to_string() x2=(VIEW_W - PAD).to_string() y1=y.clone() y2=y/> }
        })
        .collect_view()
}

#[component]
pub fn LineChart(data: &'static [ChartPoint], min: f64, max: f64, #[prop(into)] name: String) -> impl IntoView {
    let points = polyline_points(&values_of(data), min, max);
    view! {
        <figure class="chart">
            <svg class="chart__svg" viewBox=format!("0 0 {VIEW_W} {VIEW_H}") role="img" aria-label=name.clone()>
                {grid_lines()}
                <polyline class="chart__line" points=points/>
                {x_labels(data)}
            </svg>
            <figcaption class="chart__legend">{name}</figcaption>
        </figure>
    }
}

#[component]
pub fn AreaChart(data: &'static [ChartPoint], min: f64, max: f64, #[prop(into)] name: String) -> impl IntoView {
    let values = values_of(data);
    let path = area_path(&values, min, max);
    let points = polyline_points(&values, min, max);
    view! {
        <figure class="chart">
            <svg class="chart__svg" viewBox=format!("0 0 {VIEW_W} {VIEW_H}") role="img" aria-label=name.clone()>
                {grid_lines()}
                <path class="chart__area" d=path/>
                <polyline class="chart__line" points=points/>
                {x_labels(data)}
            </svg>
            <figcaption class="chart__legend">{name}</figcaption>
        </figure>
    }
}

#[component]
pub fn BarChart(data: &'static [ChartPoint], max: f64, #[prop(into)] name: String) -> impl IntoView {
    let bars = bar_rects(&values_of(data), max)
        .into_iter()
        .map(|r| {
            view! {
                <rect
                    class="chart__bar"
                    x=format!("{:.1}", r.x)
                    y=format!("{:.1}", r.y)
                    width=format!("{:.1}", r.width)
                    height=format!("{:.1}", r.height)
                />
            }
        })
        .collect_view();
    view! {
        <figure class="chart">
            <svg class="chart__svg" viewBox=format!("0 0 {VIEW_W} {VIEW_H}") role="img" aria-label=name.clone()>
                {grid_lines()}
                {bars}
                {x_labels(data)}
            </svg>
            <figcaption class="chart__legend">{name}</figcaption>
        </figure>
    }
}

#[component]
pub fn PieChart(data: &'static [PieSegment]) -> impl IntoView {
    let values: Vec<f64> = data.iter().map(|s| s.value).collect();
    let slices = pie_angles(&values)
        .into_iter()
        .zip(data.iter())
        .map(|((start, end), seg)| {
            view! { <path class="chart__slice" d=slice_path(start, end, 80.0) fill=seg.color/> }
        })
        .collect_view();
    let legend = data
        .iter()
        .map(|seg| {
            view! {
                <li class="chart__legend-item">
                    <span class="chart__swatch" style:background-color=seg.color></span>
                    {format!("{}: {}", seg.label, seg.value)}
                </li>
            }
        })
        .collect_view();
    view! {
        <figure class="chart">
            <svg class="chart__svg" viewBox=format!("0 0 {VIEW_W} {VIEW_H}") role="img">
                {slices}
            </svg>
            <ul class="chart__legend-list">{legend}</ul>
        </figure>
    }
}
