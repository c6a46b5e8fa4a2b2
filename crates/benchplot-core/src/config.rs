//! Plot pipeline configuration
//!
//! Built-in defaults reproduce the fixed-path behaviour; a TOML file and
//! then command-line values are layered on top.

use crate::display::DisplayMode;
use crate::error::{PlotError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default results file
pub const DEFAULT_INPUT: &str = "benchmark_results.txt";
/// Default output image
pub const DEFAULT_OUTPUT: &str = "benchmark_plot.png";

/// Plot pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    /// Results table to read
    pub input: PathBuf,
    /// Image to write
    pub output: PathBuf,
    /// Display policy
    pub display: DisplayMode,
    /// TrueType font for chart text
    pub font: Option<PathBuf>,
}

impl PlotConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| PlotError::io_error(path, e))?;
        Self::from_toml(&text)
            .map_err(|e| PlotError::Config(format!("{}: {e}", path.display())))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| PlotError::Config(e.to_string()))
    }

    /// With input path
    #[inline]
    #[must_use]
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// With output path
    #[inline]
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// With display policy
    #[inline]
    #[must_use]
    pub fn with_display(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    /// With font file
    #[inline]
    #[must_use]
    pub fn with_font(mut self, font: impl Into<PathBuf>) -> Self {
        self.font = Some(font.into());
        self
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            display: DisplayMode::Auto,
            font: None,
        }
    }
}
