//! PNG output for rendered figures

use crate::error::{PlotError, Result};
use crate::figure::{Figure, Rgb};
use crate::fonts::{self, FAMILY};
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Boxed drawing error; plotters errors are generic over the backend
type DrawError = Box<dyn std::error::Error>;

/// Write a figure as PNG, replacing any existing file
///
/// Uses the first available system font for text.
pub fn save(figure: &Figure, path: impl AsRef<Path>) -> Result<()> {
    save_with_font(figure, path, None)
}

/// Write a figure as PNG with an explicit font file
pub fn save_with_font(
    figure: &Figure,
    path: impl AsRef<Path>,
    font: Option<&Path>,
) -> Result<()> {
    let path = path.as_ref();
    let with_text = fonts::ensure_registered(font)?.is_some();

    draw(figure, path, with_text).map_err(|e| PlotError::save_error(path, e))?;

    tracing::info!(
        path = %path.display(),
        points = figure.point_count(),
        "saved figure"
    );
    Ok(())
}

fn draw(figure: &Figure, path: &Path, with_text: bool) -> Result<(), DrawError> {
    let root = BitMapBackend::new(path, figure.size).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_range, y_range) = (figure.x_axis.range.clone(), figure.y_axis.range.clone());
    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if with_text {
        builder
            .caption(&figure.title, (FAMILY, 24))
            .x_label_area_size(50)
            .y_label_area_size(80);
    }

    let mut chart =
        builder.build_cartesian_2d(x_range.clone().log_scale(), y_range.clone().log_scale())?;

    if with_text {
        let mut mesh = chart.configure_mesh();
        if !figure.grid {
            mesh.disable_mesh();
        }
        mesh.x_desc(figure.x_axis.label.as_str())
            .y_desc(figure.y_axis.label.as_str())
            .label_style((FAMILY, 14))
            .axis_desc_style((FAMILY, 16))
            .draw()?;
    } else {
        // the mesh lays out label text even when no labels are requested
        if figure.grid {
            let grid = BLACK.mix(0.15).stroke_width(1);
            let verticals = decades(&x_range).map(|x| vec![(x, y_range.start), (x, y_range.end)]);
            let horizontals =
                decades(&y_range).map(|y| vec![(x_range.start, y), (x_range.end, y)]);
            let lines = verticals.chain(horizontals);
            chart.draw_series(lines.map(|line| PathElement::new(line, grid)))?;
        }
        chart.plotting_area().draw(&Rectangle::new(
            [(x_range.start, y_range.start), (x_range.end, y_range.end)],
            BLACK.stroke_width(1),
        ))?;
    }

    let series = &figure.series;
    let Rgb(r, g, b) = series.color;
    let color = RGBColor(r, g, b);
    let points = series.points.iter().copied();

    chart.draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?;
    chart.draw_series(points.map(|p| Circle::new(p, series.marker_size, color.filled())))?;

    root.present()?;
    Ok(())
}

/// Powers of ten inside a log-axis range
#[allow(clippy::cast_possible_truncation)]
fn decades(range: &Range<f64>) -> impl Iterator<Item = f64> {
    let first = range.start.log10().ceil() as i32;
    let last = range.end.log10().floor() as i32;
    (first..=last).map(|e| 10f64.powi(e))
}
