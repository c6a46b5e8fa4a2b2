//! Error types for the plotting pipeline
//!
//! One error per failure point of the pipeline:
//! - Load (file → `ResultsTable`)
//! - Save (`Figure` → PNG)
//! - Show (PNG → viewer)

use std::path::PathBuf;

/// Errors raised while loading, rendering, saving, or displaying a chart
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// IO error reading the results file
    #[error("io error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input holds no data rows
    #[error("no data rows in {}", path.display())]
    Empty { path: PathBuf },

    /// A token that is not a number
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    /// A row with fewer than two columns
    #[error("line {line}: expected at least 2 columns, found {found}")]
    TooFewColumns { line: usize, found: usize },

    /// A row whose width differs from the first row
    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Parse failure located in a file
    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<PlotError>,
    },

    /// Drawing backend failure
    #[error("render failed: {0}")]
    Render(String),

    /// Output image could not be written
    #[error("failed to save {}: {message}", path.display())]
    Save { path: PathBuf, message: String },

    /// Font file unreadable or invalid
    #[error("font {}: {message}", path.display())]
    Font { path: PathBuf, message: String },

    /// Image viewer could not be launched
    #[error("failed to display {}: {source}", path.display())]
    Display {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl PlotError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create save error for path
    pub fn save_error(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Save {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Attach the source file to a parse error
    ///
    /// `Empty` already names its path and is re-pointed instead of wrapped.
    #[must_use]
    pub fn at_path(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match self {
            Self::Empty { .. } => Self::Empty { path },
            Self::InvalidNumber { .. }
            | Self::TooFewColumns { .. }
            | Self::ColumnMismatch { .. } => Self::InFile {
                path,
                source: Box::new(self),
            },
            other => other,
        }
    }

    /// Line number of a parse error, if any
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidNumber { line, .. }
            | Self::TooFewColumns { line, .. }
            | Self::ColumnMismatch { line, .. } => Some(*line),
            Self::InFile { source, .. } => source.line(),
            _ => None,
        }
    }
}

/// Result alias for the plotting pipeline
pub type Result<T, E = PlotError> = std::result::Result<T, E>;
