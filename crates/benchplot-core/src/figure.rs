//! Figure model and the log-log render step
//!
//! `render` is pure: it turns a `ResultsTable` into a `Figure` describing
//! everything that gets drawn. Rasterization lives in [`crate::output`].

use crate::table::ResultsTable;
use std::ops::Range;

/// Chart title
pub const TITLE: &str = "Merge Sort Benchmark on Centaurus";
/// X axis label
pub const X_LABEL: &str = "Array Size";
/// Y axis label
pub const Y_LABEL: &str = "Time (seconds)";
/// Series label
pub const SERIES_LABEL: &str = "Merge Sort Performance";
/// Figure size in pixels (10 x 5 inches at 100 dpi)
pub const FIGURE_SIZE: (u32, u32) = (1000, 500);
/// Axis margin, as a fraction of the data span in log10 space
pub const LOG_MARGIN: f64 = 0.05;
/// Range used when an axis has no drawable data
pub const DEFAULT_RANGE: Range<f64> = 1.0..10.0;

/// Axis exponents are kept inside the normal, finite `f64` range
const MIN_EXPONENT: f64 = -307.0;
const MAX_EXPONENT: f64 = 308.0;
/// Widest axis span in decades; the end-to-start ratio must stay finite
const MAX_DECADES: f64 = 307.0;

/// Axis scale
///
/// Benchmark charts are drawn log-log only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scale {
    /// Base-10 logarithmic scale
    Log,
}

/// Marker drawn at each data point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Filled circle
    Circle,
}

/// Line connecting data points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Solid line
    Solid,
}

/// RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Default series colour
    pub const SERIES: Self = Self(31, 119, 180);
}

/// One chart axis
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    /// Axis description
    pub label: String,
    /// Scale
    pub scale: Scale,
    /// Visible range
    pub range: Range<f64>,
}

/// A single plotted series
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend label
    pub label: String,
    /// Points in input order
    pub points: Vec<(f64, f64)>,
    /// Point marker
    pub marker: Marker,
    /// Marker radius in pixels
    pub marker_size: i32,
    /// Connecting line
    pub line: LineStyle,
    /// Colour
    pub color: Rgb,
}

/// A rendered chart, ready to be saved
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Title
    pub title: String,
    /// Horizontal axis
    pub x_axis: Axis,
    /// Vertical axis
    pub y_axis: Axis,
    /// The data series
    pub series: Series,
    /// Whether grid lines are drawn
    pub grid: bool,
    /// Pixel size (width, height)
    pub size: (u32, u32),
}

impl Figure {
    /// Number of drawn points
    #[inline]
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.points.len()
    }

    /// Check that both axes are logarithmic
    #[inline]
    #[must_use]
    pub fn is_log_log(&self) -> bool {
        self.x_axis.scale == Scale::Log && self.y_axis.scale == Scale::Log
    }
}

/// Build the log-log figure for a results table
///
/// Points with a non-positive coordinate have no position on a log axis
/// and are masked out.
#[must_use]
pub fn render(table: &ResultsTable) -> Figure {
    let points: Vec<(f64, f64)> = table
        .iter()
        .map(|r| r.as_point())
        .filter(|&(x, y)| is_drawable(x) && is_drawable(y))
        .collect();

    let masked = table.len() - points.len();
    if masked > 0 {
        tracing::warn!(masked, "dropped points that cannot be shown on a log scale");
    }

    let x_range = log_range(points.iter().map(|p| p.0));
    let y_range = log_range(points.iter().map(|p| p.1));
    tracing::debug!(points = points.len(), ?x_range, ?y_range, "rendered figure");

    Figure {
        title: TITLE.to_string(),
        x_axis: Axis {
            label: X_LABEL.to_string(),
            scale: Scale::Log,
            range: x_range,
        },
        y_axis: Axis {
            label: Y_LABEL.to_string(),
            scale: Scale::Log,
            range: y_range,
        },
        series: Series {
            label: SERIES_LABEL.to_string(),
            points,
            marker: Marker::Circle,
            marker_size: 4,
            line: LineStyle::Solid,
            color: Rgb::SERIES,
        },
        grid: true,
        size: FIGURE_SIZE,
    }
}

fn is_drawable(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Data bounds padded by [`LOG_MARGIN`] in log10 space
///
/// Bounds are clamped so both ends stay finite and positive. Data spanning
/// more than [`MAX_DECADES`] keeps its upper end and loses the lowest values.
fn log_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let Some((data_lo, data_hi)) = values
        .map(f64::log10)
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    else {
        return DEFAULT_RANGE;
    };

    let (lo, hi) = if data_hi > data_lo {
        let pad = (data_hi - data_lo) * LOG_MARGIN;
        (data_lo - pad, data_hi + pad)
    } else {
        (data_lo - 1.0, data_hi + 1.0)
    };
    let hi = hi.clamp(MIN_EXPONENT + 1.0, MAX_EXPONENT);
    let lo = lo.clamp(MIN_EXPONENT, hi - 1.0).max(hi - MAX_DECADES);
    if lo > data_lo {
        tracing::warn!(lowest = 10f64.powf(data_lo), "values below the axis range are not shown");
    }
    10f64.powf(lo)..10f64.powf(hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Record;
    use pretty_assertions::assert_eq;

    fn table(rows: &[(f64, f64)]) -> ResultsTable {
        ResultsTable::from_records(rows.iter().map(|&(s, t)| Record::new(s, t)).collect())
    }

    #[test]
    fn fixed_presentation() {
        let fig = render(&table(&[(1.0, 0.001), (2.0, 0.002)]));
        assert_eq!(fig.title, TITLE);
        assert_eq!(fig.x_axis.label, "Array Size");
        assert_eq!(fig.y_axis.label, "Time (seconds)");
        assert_eq!(fig.series.marker, Marker::Circle);
        assert_eq!(fig.series.line, LineStyle::Solid);
        assert!(fig.grid);
        assert!(fig.is_log_log());
        assert_eq!(fig.size, (1000, 500));
    }

    #[test]
    fn ranges_cover_data() {
        let fig = render(&table(&[(1.0, 0.001), (8.0, 0.012)]));
        assert!(fig.x_axis.range.start < 1.0 && fig.x_axis.range.end > 8.0);
        assert!(fig.y_axis.range.start < 0.001 && fig.y_axis.range.end > 0.012);
    }

    #[test]
    fn margin_is_symmetric_in_log_space() {
        let fig = render(&table(&[(10.0, 1.0), (1000.0, 100.0)]));
        let lo = fig.x_axis.range.start.log10();
        let hi = fig.x_axis.range.end.log10();
        assert!((lo - 0.9).abs() < 1e-9);
        assert!((hi - 3.1).abs() < 1e-9);
    }

    #[test]
    fn single_point_spans_two_decades() {
        let fig = render(&table(&[(100.0, 0.5)]));
        assert!((fig.x_axis.range.start - 10.0).abs() < 1e-9);
        assert!((fig.x_axis.range.end - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn masks_non_positive_points() {
        let fig = render(&table(&[(0.0, 0.1), (2.0, -1.0), (4.0, 0.005)]));
        assert_eq!(fig.series.points, vec![(4.0, 0.005)]);
    }

    #[test]
    fn all_masked_uses_default_range() {
        let fig = render(&table(&[(0.0, 0.0)]));
        assert_eq!(fig.point_count(), 0);
        assert_eq!(fig.x_axis.range, DEFAULT_RANGE);
        assert_eq!(fig.y_axis.range, DEFAULT_RANGE);
    }

    fn assert_drawable(range: &Range<f64>) {
        assert!(range.start > 0.0 && range.start.is_normal(), "start {range:?}");
        assert!(range.end.is_finite() && range.end > range.start, "end {range:?}");
        assert!((range.end / range.start).is_finite(), "ratio {range:?}");
    }

    #[test]
    fn huge_values_keep_a_finite_range() {
        let fig = render(&table(&[(1.0, 1.0), (1e308, 2.0)]));
        assert_drawable(&fig.x_axis.range);
        assert!(fig.x_axis.range.end > 1e307);
        assert_drawable(&fig.y_axis.range);
    }

    #[test]
    fn tiny_values_keep_a_positive_range() {
        let fig = render(&table(&[(1.0, 1e-320), (2.0, 1e16)]));
        assert_eq!(fig.point_count(), 2);
        assert_drawable(&fig.y_axis.range);
        assert!(fig.y_axis.range.end > 1e16);

        let only_tiny = render(&table(&[(1e-320, 1e-320)]));
        assert_drawable(&only_tiny.x_axis.range);
        assert_drawable(&only_tiny.y_axis.range);
    }
}
