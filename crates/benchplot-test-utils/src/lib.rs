//! Testing utilities for benchplot workspace
//!
//! Shared results-file fixtures.

#![allow(missing_docs)]

use std::fmt::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

/// The four-row doubling series used throughout the tests
pub const DOUBLING_ROWS: [(f64, f64); 4] = [(1.0, 0.001), (2.0, 0.002), (4.0, 0.005), (8.0, 0.012)];

pub fn results_text(rows: &[(f64, f64)]) -> String {
    rows.iter().fold(String::new(), |mut out, (size, time)| {
        let _ = writeln!(out, "{size} {time}");
        out
    })
}

/// A scratch directory holding files for one test
pub struct Scratch {
    dir: TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn write_results(&self, name: &str, rows: &[(f64, f64)]) -> PathBuf {
        self.write(name, &results_text(rows))
    }
}

impl Default for Scratch {
    fn default() -> Self {
        Self::new()
    }
}
