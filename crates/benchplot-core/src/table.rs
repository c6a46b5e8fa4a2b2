//! Results table: the in-memory two-column dataset
//!
//! Input format is plain text, one record per line, columns separated by
//! whitespace. Blank lines are skipped and `#` starts a comment. Every data
//! row must have the same width as the first one; only the first two
//! columns are kept.

use crate::error::{PlotError, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Comment marker
const COMMENT: char = '#';

/// One benchmark measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Problem size (x axis)
    pub size: f64,
    /// Elapsed time in seconds (y axis)
    pub time: f64,
}

impl Record {
    /// Create new record
    #[inline]
    #[must_use]
    pub fn new(size: f64, time: f64) -> Self {
        Self { size, time }
    }

    /// As an `(x, y)` point
    #[inline]
    #[must_use]
    pub fn as_point(&self) -> (f64, f64) {
        (self.size, self.time)
    }
}

/// Ordered benchmark records, one per input row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsTable {
    records: Vec<Record>,
}

impl ResultsTable {
    /// Number of columns a table exposes
    pub const COLUMNS: usize = 2;

    /// Build from records
    #[must_use]
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Read and parse a results file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| PlotError::io_error(path, e))?;
        let table = Self::parse(&text).map_err(|e| e.at_path(path))?;
        tracing::debug!(path = %path.display(), rows = table.len(), "loaded results table");
        Ok(table)
    }

    /// Parse results text
    pub fn parse(text: &str) -> Result<Self> {
        let mut records = Vec::new();
        let mut width = None;

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let content = raw.split(COMMENT).next().unwrap_or_default();
            let tokens: Vec<&str> = content.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }

            match width {
                None if tokens.len() < Self::COLUMNS => {
                    return Err(PlotError::TooFewColumns {
                        line,
                        found: tokens.len(),
                    });
                }
                None => width = Some(tokens.len()),
                Some(expected) if expected != tokens.len() => {
                    return Err(PlotError::ColumnMismatch {
                        line,
                        expected,
                        found: tokens.len(),
                    });
                }
                Some(_) => {}
            }

            let mut values = tokens
                .iter()
                .map(|token| parse_number(token, line));
            let size = values.next().transpose()?.unwrap_or_default();
            let time = values.next().transpose()?.unwrap_or_default();
            // extra columns still have to be numeric
            for value in values {
                value?;
            }
            records.push(Record::new(size, time));
        }

        if records.is_empty() {
            return Err(PlotError::Empty {
                path: PathBuf::from("<input>"),
            });
        }
        Ok(Self { records })
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if table has no rows
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in input order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// First column
    #[must_use]
    pub fn sizes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.size).collect()
    }

    /// Second column
    #[must_use]
    pub fn times(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.time).collect()
    }

    /// Iterate records
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl FromStr for ResultsTable {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a ResultsTable {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn parse_number(token: &str, line: usize) -> Result<f64> {
    token.parse::<f64>().map_err(|_| PlotError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}
