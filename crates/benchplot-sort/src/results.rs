//! Results file writer
//!
//! One `size seconds` line per sample, the format `ResultsTable` reads.

use crate::error::BenchError;
use crate::runner::Sample;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Format one results line
#[must_use]
pub fn format_line(sample: &Sample) -> String {
    format!("{} {}", sample.size, sample.seconds())
}

/// Write samples to a results file
///
/// With `append` the samples are added after existing lines, otherwise
/// the file is replaced.
pub fn write_results(
    path: impl AsRef<Path>,
    samples: &[Sample],
    append: bool,
) -> Result<(), BenchError> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .map_err(|e| BenchError::io_error(path, e))?;

    let mut out = BufWriter::new(file);
    for sample in samples {
        writeln!(out, "{}", format_line(sample)).map_err(|e| BenchError::io_error(path, e))?;
    }
    out.flush().map_err(|e| BenchError::io_error(path, e))?;

    tracing::info!(path = %path.display(), samples = samples.len(), append, "wrote results");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sample(size: usize, millis: u64) -> Sample {
        Sample {
            size,
            elapsed: Duration::from_millis(millis),
        }
    }

    #[test]
    fn line_format() {
        assert_eq!(format_line(&sample(1024, 1)), "1024 0.001");
        assert_eq!(format_line(&sample(8, 1500)), "8 1.5");
    }

    #[test]
    fn truncates_or_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("benchmark_results.txt");

        write_results(&path, &[sample(1, 1), sample(2, 2)], false).unwrap();
        write_results(&path, &[sample(4, 5)], true).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "1 0.001\n2 0.002\n4 0.005\n"
        );

        write_results(&path, &[sample(8, 12)], false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "8 0.012\n");
    }
}
