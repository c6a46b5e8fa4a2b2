//! The load → render → save → show pipeline

use crate::config::PlotConfig;
use crate::display::{self, Shown};
use crate::error::Result;
use crate::figure::{self, Figure};
use crate::output;
use crate::table::ResultsTable;

/// Outcome of a pipeline run
#[derive(Debug, Clone)]
pub struct PlotReport {
    /// Rows read from the input
    pub rows: usize,
    /// The figure that was saved
    pub figure: Figure,
    /// What the display step did
    pub shown: Shown,
}

/// Run the full pipeline for a configuration
///
/// Every step is fatal on failure; nothing is retried.
pub fn run(config: &PlotConfig) -> Result<PlotReport> {
    tracing::info!(input = %config.input.display(), "loading results");
    let table = ResultsTable::load(&config.input)?;

    let figure = figure::render(&table);
    output::save_with_font(&figure, &config.output, config.font.as_deref())?;
    let shown = display::show(&config.output, config.display)?;

    Ok(PlotReport {
        rows: table.len(),
        figure,
        shown,
    })
}
