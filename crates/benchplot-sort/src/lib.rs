//! Merge sort benchmark
//!
//! Times a top-down merge sort over random arrays of increasing size and
//! writes one `size seconds` line per run, ready for plotting.
//!
//! ```rust,no_run
//! use benchplot_sort::{run, write_results, BenchConfig};
//!
//! # fn example() -> Result<(), benchplot_sort::BenchError> {
//! let samples = run(&BenchConfig::new().with_sizes(vec![1 << 10, 1 << 12]))?;
//! write_results("benchmark_results.txt", &samples, false)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod results;
pub mod runner;
pub mod sort;

pub use error::BenchError;
pub use results::{format_line, write_results};
pub use runner::{default_sizes, random_array, run, BenchConfig, Sample};
pub use sort::{is_sorted, merge_sort};
