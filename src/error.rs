use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NgramError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    /// One or more rows were dropped from the pass. Raised once per pass, not per row.
    #[error("Invalid metrics found in {rows} row(s). Please ensure all provided metrics are valid numbers.")]
    InvalidMetric { rows: usize },

    #[error("No valid n-grams found in the input.")]
    EmptyResult,

    #[error("No data to export. Please generate an n-gram list first.")]
    ExportWithNoData,

    #[error("No data to re-calculate. Please input data or load a file first.")]
    NoInput,
}

impl NgramError {
    /// Warnings leave the pass usable; everything else means there is nothing to show.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::InvalidMetric { .. })
    }
}

pub type NgResult<T> = Result<T, NgramError>;

/// Why a single row was excluded from accumulation.
#[derive(Debug, Clone, PartialEq)]
pub enum RowError {
    Unparsable {
        line: usize,
        field: usize,
        value: String,
    },
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparsable { line, field, value } => write!(
                f,
                "line {}: metric field {} ('{}') is not a number",
                line, field, value
            ),
            Self::FieldCount {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {}: expected {} metric field(s), found {}",
                line, expected, found
            ),
        }
    }
}
