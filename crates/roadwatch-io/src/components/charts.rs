//! Inline SVG charts for the Data Analysis page.
//!
//! No chart library; the geometry is a handful of rectangles and
//! dash-offset circle segments, rendered as responsive SVG the same
//! way media previews are elsewhere in the app.

use dioxus::prelude::*;
use roadwatch_api::VehicleSlice;

/// Fill palette for chart series, cycled when there are more slices
/// than colors.
const PALETTE: &[&str] = &[
    "#0088fe", "#00c49f", "#ffbb28", "#ff8042", "#8884d8", "#82ca9d",
];

const BAR_WIDTH: f64 = 480.0;
const BAR_HEIGHT: f64 = 300.0;
const BAR_BASELINE: f64 = 270.0; // leaves room for labels below
const BAR_TOP: f64 = 24.0;

/// Props for the [`BarChart`] component.
#[derive(Props, Clone, PartialEq)]
pub struct BarChartProps {
    /// One bar per slice, in the order received.
    slices: Vec<VehicleSlice>,
}

/// Vertical bar chart of accident counts per vehicle type.
#[component]
pub fn BarChart(props: BarChartProps) -> Element {
    if props.slices.is_empty() {
        return rsx! {
            p { class: "chart-empty", "No vehicle data available" }
        };
    }

    let view_box = format!("0 0 {BAR_WIDTH} {BAR_HEIGHT}");
    let max = props
        .slices
        .iter()
        .map(|slice| slice.count)
        .max()
        .unwrap_or(1)
        .max(1);

    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "{view_box}",
            class: "chart-svg",
            "preserveAspectRatio": "xMidYMid meet",

            line {
                x1: "0",
                y1: "{BAR_BASELINE}",
                x2: "{BAR_WIDTH}",
                y2: "{BAR_BASELINE}",
                stroke: "var(--border)",
                stroke_width: "1",
            }

            for (i, slice) in props.slices.iter().enumerate() {
                {render_bar(slice, i, props.slices.len(), max)}
            }
        }
    }
}

/// Render one bar with its count and label.
fn render_bar(slice: &VehicleSlice, index: usize, bar_count: usize, max: u64) -> Element {
    #[allow(clippy::cast_precision_loss)]
    let step = BAR_WIDTH / bar_count as f64;
    #[allow(clippy::cast_precision_loss)]
    let center = step * (index as f64 + 0.5);
    #[allow(clippy::cast_precision_loss)]
    let height = (slice.count as f64 / max as f64) * (BAR_BASELINE - BAR_TOP);
    let width = (step * 0.6).min(64.0);
    let x = center - width / 2.0;
    let y = BAR_BASELINE - height;
    let value_y = y - 6.0;
    let label_y = BAR_BASELINE + 18.0;
    let fill = PALETTE[index % PALETTE.len()];

    rsx! {
        rect {
            x: "{x}",
            y: "{y}",
            width: "{width}",
            height: "{height}",
            fill: "{fill}",
            rx: "2",
        }
        text {
            x: "{center}",
            y: "{value_y}",
            text_anchor: "middle",
            class: "chart-value",
            "{slice.count}"
        }
        text {
            x: "{center}",
            y: "{label_y}",
            text_anchor: "middle",
            class: "chart-label",
            "{slice.label}"
        }
    }
}

const DONUT_SIZE: f64 = 300.0;
const DONUT_RADIUS: f64 = 90.0;
const DONUT_STROKE: f64 = 48.0;

/// Props for the [`DonutChart`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DonutChartProps {
    /// One arc per slice, in the order received.
    slices: Vec<VehicleSlice>,
}

/// Donut chart of each vehicle type's share of accidents.
///
/// Each slice is a circle segment drawn with `stroke-dasharray`; the
/// ring is rotated so the first slice starts at twelve o'clock.
#[component]
pub fn DonutChart(props: DonutChartProps) -> Element {
    let total: u64 = props.slices.iter().map(|slice| slice.count).sum();
    if total == 0 {
        return rsx! {
            p { class: "chart-empty", "No vehicle data available" }
        };
    }

    let view_box = format!("0 0 {DONUT_SIZE} {DONUT_SIZE}");
    let center = DONUT_SIZE / 2.0;
    let rotate = format!("rotate(-90 {center} {center})");
    let circumference = std::f64::consts::TAU * DONUT_RADIUS;
    let arcs = arc_spans(&props.slices, total, circumference);

    rsx! {
        div { class: "donut-wrap",
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "{view_box}",
                class: "chart-svg donut-svg",
                "preserveAspectRatio": "xMidYMid meet",

                g { transform: "{rotate}",
                    for (i, span) in arcs.iter().enumerate() {
                        {render_arc(*span, i, center, circumference)}
                    }
                }
            }

            ul { class: "donut-legend",
                for (i, slice) in props.slices.iter().enumerate() {
                    {render_legend_item(slice, i, total)}
                }
            }
        }
    }
}

/// Render one donut segment as a dash-patterned circle stroke.
fn render_arc(span: (f64, f64), index: usize, center: f64, circumference: f64) -> Element {
    let (length, offset) = span;
    let dash_array = format!("{length} {}", circumference - length);
    let dash_offset = -offset;
    let stroke = PALETTE[index % PALETTE.len()];

    rsx! {
        circle {
            cx: "{center}",
            cy: "{center}",
            r: "{DONUT_RADIUS}",
            fill: "none",
            stroke: "{stroke}",
            stroke_width: "{DONUT_STROKE}",
            stroke_dasharray: "{dash_array}",
            stroke_dashoffset: "{dash_offset}",
        }
    }
}

/// Render one legend row with its color swatch and share.
fn render_legend_item(slice: &VehicleSlice, index: usize, total: u64) -> Element {
    let swatch = format!("background:{}", PALETTE[index % PALETTE.len()]);
    let share = share_percent(slice.count, total);

    rsx! {
        li { class: "donut-legend-item",
            span { class: "donut-swatch", style: "{swatch}" }
            "{slice.label}: {slice.count} ({share})"
        }
    }
}

/// Compute each slice's arc length and starting offset along the ring.
fn arc_spans(slices: &[VehicleSlice], total: u64, circumference: f64) -> Vec<(f64, f64)> {
    let mut spans = Vec::with_capacity(slices.len());
    let mut offset = 0.0;
    for slice in slices {
        #[allow(clippy::cast_precision_loss)]
        let length = circumference * slice.count as f64 / total as f64;
        spans.push((length, offset));
        offset += length;
    }
    spans
}

/// Format a share as a whole percentage.
#[must_use]
pub fn share_percent(count: u64, total: u64) -> String {
    if total == 0 {
        return "0%".to_owned();
    }
    #[allow(clippy::cast_precision_loss)]
    let share = 100.0 * count as f64 / total as f64;
    format!("{share:.0}%")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn slice(label: &str, count: u64) -> VehicleSlice {
        VehicleSlice {
            label: label.to_owned(),
            count,
        }
    }

    #[test]
    fn arc_spans_tile_the_full_ring() {
        let slices = vec![slice("Car", 3), slice("Truck", 1)];
        let spans = arc_spans(&slices, 4, 400.0);
        assert_eq!(spans.len(), 2);
        assert!((spans[0].0 - 300.0).abs() < 1e-9);
        assert!((spans[1].0 - 100.0).abs() < 1e-9);
        // Second arc starts where the first ends.
        assert!((spans[1].1 - 300.0).abs() < 1e-9);
    }

    #[test]
    fn share_percent_rounds_to_whole_numbers() {
        assert_eq!(share_percent(1, 3), "33%");
        assert_eq!(share_percent(0, 0), "0%");
    }
}
