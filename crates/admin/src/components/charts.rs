//! Inline SVG chart geometry for the analysis page.
//!
//! Templates draw the shapes; this module only computes coordinates. All
//! charts share one viewBox of [`WIDTH`] x [`HEIGHT`].

use std::f64::consts::PI;
use std::fmt::Write as _;

use atelier_core::analytics::{MonthlySales, ProductSales, ProfitLossEntry};

pub const WIDTH: f64 = 600.0;
pub const HEIGHT: f64 = 300.0;

const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 40.0;
const TICK_COUNT: u32 = 4;
const BAR_GAP_RATIO: f64 = 0.3;
const PIE_RADIUS: f64 = 120.0;

/// Slice and series colours, cycled.
pub const PALETTE: [&str; 4] = ["#4F46E5", "#22C55E", "#EF4444", "#F59E0B"];

/// A horizontal grid line with its axis label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub y: String,
    pub label: String,
}

/// A plotted point of the line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub x: String,
    pub y: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    /// `points` attribute of the `<polyline>`.
    pub polyline: String,
    pub points: Vec<LinePoint>,
    pub ticks: Vec<Tick>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: String,
    pub y: String,
    pub width: String,
    pub height: String,
    /// Centre of the bar, for the axis label.
    pub label_x: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub bars: Vec<Bar>,
    pub ticks: Vec<Tick>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// SVG path `d` attribute.
    pub path: String,
    pub color: &'static str,
    pub label: String,
    pub value: String,
    pub percent: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
}

/// Shared y axis: `0..=max` with evenly spaced ticks.
struct Scale {
    max: f64,
}

impl Scale {
    fn for_values(values: impl Iterator<Item = f64>) -> Self {
        let peak = values.filter(|v| v.is_finite()).fold(0.0_f64, f64::max);
        Self {
            max: nice_ceiling(peak),
        }
    }

    const fn plot_height() -> f64 {
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn y(&self, value: f64) -> f64 {
        let ratio = (value.max(0.0) / self.max).min(1.0);
        HEIGHT - MARGIN_BOTTOM - ratio * Self::plot_height()
    }

    fn ticks(&self) -> Vec<Tick> {
        (0..=TICK_COUNT)
            .map(|step| {
                let value = self.max * f64::from(step) / f64::from(TICK_COUNT);
                Tick {
                    y: coord(self.y(value)),
                    label: compact_number(value),
                }
            })
            .collect()
    }
}

/// Round up to 1, 2, 2.5 or 5 times a power of ten; never below 1.
#[must_use]
pub fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 1.0 {
        return 1.0;
    }
    let magnitude = 10_f64.powf(value.log10().floor());
    let normalized = value / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|step| normalized <= *step)
        .unwrap_or(10.0);
    step * magnitude
}

/// Axis label: `950`, `1.5k`, `2M`.
#[must_use]
pub fn compact_number(value: f64) -> String {
    let trim = |s: String| match s.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => s,
    };
    if value.abs() >= 1_000_000.0 {
        format!("{}M", trim(format!("{:.1}", value / 1_000_000.0)))
    } else if value.abs() >= 1_000.0 {
        format!("{}k", trim(format!("{:.1}", value / 1_000.0)))
    } else {
        trim(format!("{value:.1}"))
    }
}

fn coord(value: f64) -> String {
    format!("{value:.1}")
}

#[allow(clippy::cast_precision_loss)]
fn slot_width(count: usize) -> f64 {
    (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / count.max(1) as f64
}

#[allow(clippy::cast_precision_loss)]
fn slot_centre(index: usize, count: usize) -> f64 {
    MARGIN_LEFT + slot_width(count) * (index as f64 + 0.5)
}

/// Sales over time as a line chart, one point per month.
#[must_use]
pub fn line_chart(series: &[MonthlySales]) -> LineChart {
    let scale = Scale::for_values(series.iter().map(|m| m.sales));
    let count = series.len();

    let points: Vec<LinePoint> = series
        .iter()
        .enumerate()
        .map(|(index, month)| LinePoint {
            x: coord(slot_centre(index, count)),
            y: coord(scale.y(month.sales)),
            label: month.month.clone(),
            value: compact_number(month.sales),
        })
        .collect();

    let polyline = points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    LineChart {
        polyline,
        points,
        ticks: scale.ticks(),
    }
}

/// Top products as a bar chart.
#[must_use]
pub fn bar_chart(products: &[ProductSales]) -> BarChart {
    let scale = Scale::for_values(products.iter().map(|p| p.sales));
    let count = products.len();
    let bar_width = slot_width(count) * (1.0 - BAR_GAP_RATIO);
    let baseline = HEIGHT - MARGIN_BOTTOM;

    let bars = products
        .iter()
        .enumerate()
        .map(|(index, product)| {
            let centre = slot_centre(index, count);
            let top = scale.y(product.sales);
            Bar {
                x: coord(centre - bar_width / 2.0),
                y: coord(top),
                width: coord(bar_width),
                height: coord(baseline - top),
                label_x: coord(centre),
                label: product.name.clone(),
                value: compact_number(product.sales),
            }
        })
        .collect();

    BarChart {
        bars,
        ticks: scale.ticks(),
    }
}

/// Profit/loss breakdown as a pie. Non-positive entries get no slice.
#[must_use]
pub fn pie_chart(entries: &[ProfitLossEntry]) -> PieChart {
    let total: f64 = entries.iter().map(|e| e.value.max(0.0)).sum();
    if total <= 0.0 {
        return PieChart { slices: Vec::new() };
    }

    let (cx, cy) = (WIDTH / 2.0, HEIGHT / 2.0);
    let mut start = -PI / 2.0;
    let mut slices = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        if entry.value <= 0.0 {
            continue;
        }
        let fraction = entry.value / total;
        let end = 2.0f64.mul_add(PI * fraction, start);
        slices.push(PieSlice {
            path: slice_path(cx, cy, PIE_RADIUS, start, end),
            color: PALETTE[index % PALETTE.len()],
            label: entry.kind.clone(),
            value: compact_number(entry.value),
            percent: format!("{:.0}%", fraction * 100.0),
        });
        start = end;
    }

    PieChart { slices }
}

fn slice_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let point = |angle: f64| (r.mul_add(angle.cos(), cx), r.mul_add(angle.sin(), cy));
    let mut path = String::new();

    if end - start >= 2.0f64.mul_add(PI, -1e-9) {
        // A lone slice is a full disc: two half arcs, since one arc cannot
        // start and end on the same point.
        let (x1, y1) = point(start);
        let (x2, y2) = point(start + PI);
        let _ = write!(
            path,
            "M {} {} A {r:.1} {r:.1} 0 1 1 {} {} A {r:.1} {r:.1} 0 1 1 {} {} Z",
            coord(x1),
            coord(y1),
            coord(x2),
            coord(y2),
            coord(x1),
            coord(y1),
        );
        return path;
    }

    let (x1, y1) = point(start);
    let (x2, y2) = point(end);
    let large_arc = u8::from(end - start > PI);
    let _ = write!(
        path,
        "M {} {} L {} {} A {r:.1} {r:.1} 0 {large_arc} 1 {} {} Z",
        coord(cx),
        coord(cy),
        coord(x1),
        coord(y1),
        coord(x2),
        coord(y2),
    );
    path
}
