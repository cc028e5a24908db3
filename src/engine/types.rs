use crate::error::{NgramError, RowError};
use serde::Serialize;

/// One ranked n-gram with its reduced metrics, aligned to the configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    pub text: String,
    pub count: usize,
    /// `None` when the slot is disabled or never received a sample.
    pub metrics: Vec<Option<f64>>,
}

impl ResultRecord {
    pub fn metric(&self, slot: usize) -> Option<f64> {
        self.metrics.get(slot).copied().flatten()
    }
}

/// Outcome of a successful pass.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub records: Vec<ResultRecord>,
    pub rejected: Vec<RowError>,
    pub rows_scanned: usize,
}

impl Aggregation {
    /// The single warning surfaced for a pass that dropped rows.
    pub fn warning(&self) -> Option<NgramError> {
        if self.rejected.is_empty() {
            None
        } else {
            Some(NgramError::InvalidMetric {
                rows: self.rejected.len(),
            })
        }
    }
}
