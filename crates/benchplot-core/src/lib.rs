//! benchplot core
//!
//! Turns a two-column benchmark results file (problem size, elapsed
//! seconds) into a log-log chart.
//!
//! # Pipeline
//!
//! ```text
//! results.txt → ResultsTable::load → render → Figure → save → PNG → show
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use benchplot_core::prelude::*;
//!
//! # fn example() -> Result<(), PlotError> {
//! let table = ResultsTable::load("benchmark_results.txt")?;
//! let figure = render(&table);
//! save(&figure, "benchmark_plot.png")?;
//! show("benchmark_plot.png", DisplayMode::Auto)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod display;
pub mod error;
pub mod figure;
pub mod fonts;
pub mod output;
pub mod pipeline;
pub mod table;

pub use config::PlotConfig;
pub use display::{show, DisplayMode, Shown};
pub use error::PlotError;
pub use figure::{render, Figure};
pub use output::{save, save_with_font};
pub use pipeline::{run, PlotReport};
pub use table::{Record, ResultsTable};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for the plotting pipeline
    pub use crate::config::PlotConfig;
    pub use crate::display::{show, DisplayMode, Shown};
    pub use crate::error::PlotError;
    pub use crate::figure::{render, Axis, Figure, Scale, Series};
    pub use crate::output::{save, save_with_font};
    pub use crate::table::{Record, ResultsTable};
}
