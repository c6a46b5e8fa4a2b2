//! Error types for benchmark runs

use std::path::PathBuf;

/// Errors raised while running the benchmark or writing its results
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// No sizes to run
    #[error("no array sizes given")]
    NoSizes,

    /// A size that cannot be plotted on a log axis
    #[error("array size must be positive")]
    ZeroSize,

    /// Sort produced unordered output
    #[error("merge sort returned unsorted output for size {size}")]
    Unsorted { size: usize },

    /// IO error writing the results file
    #[error("io error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BenchError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
