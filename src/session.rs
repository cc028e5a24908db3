use crate::config::{MetricConfig, Reducer};
use crate::engine::{aggregate, ResultRecord};
use crate::error::{NgResult, NgramError};
use crate::export::{self, Quoting};
use crate::input::{parse_rows, RawRow};
use tracing::info;

/// A single edit to one metric slot.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricEdit {
    Rename(String),
    Reducer(Reducer),
    Enabled(bool),
}

/// Caller-facing state: loaded rows, configuration, and the latest pass.
///
/// Every mutation that can change the outcome re-runs a full pass. Nothing from
/// a previous pass is reused.
#[derive(Debug)]
pub struct Session {
    rows: Vec<RawRow>,
    config: MetricConfig,
    ngram_size: usize,
    records: Vec<ResultRecord>,
    message: Option<NgramError>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            config: MetricConfig::default(),
            ngram_size: 1,
            records: Vec::new(),
            message: None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    pub fn config(&self) -> &MetricConfig {
        &self.config
    }

    pub fn ngram_size(&self) -> usize {
        self.ngram_size
    }

    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    /// The error or warning left by the most recent operation.
    pub fn message(&self) -> Option<&NgramError> {
        self.message.as_ref()
    }

    pub fn take_message(&mut self) -> Option<NgramError> {
        self.message.take()
    }

    /// Display prefix of the ranked results.
    pub fn top(&self, k: usize) -> &[ResultRecord] {
        &self.records[..k.min(self.records.len())]
    }

    pub fn set_input(&mut self, text: &str) -> NgResult<()> {
        self.set_rows(parse_rows(text)?);
        Ok(())
    }

    pub fn set_rows(&mut self, rows: Vec<RawRow>) {
        info!("Input replaced: {} rows", rows.len());
        self.rows = rows;
        self.run_pass();
    }

    pub fn set_metric_config(&mut self, config: MetricConfig) {
        self.config = config;
        self.refresh();
    }

    pub fn set_ngram_size(&mut self, n: usize) {
        self.ngram_size = n;
        self.refresh();
    }

    pub fn update_metric(&mut self, index: usize, edit: MetricEdit) -> NgResult<()> {
        let len = self.config.len();
        let slot = self.config.slots_mut().get_mut(index).ok_or_else(|| {
            NgramError::Config(format!(
                "Metric index {} out of range (have {} metric(s))",
                index, len
            ))
        })?;

        match edit {
            MetricEdit::Rename(name) => slot.name = name,
            MetricEdit::Reducer(reducer) => slot.reducer = reducer,
            MetricEdit::Enabled(enabled) => slot.enabled = enabled,
        }
        self.refresh();
        Ok(())
    }

    /// Explicit re-run. Unlike the automatic refresh, this complains when nothing is loaded.
    pub fn recalculate(&mut self) {
        if self.rows.is_empty() {
            self.message = Some(NgramError::NoInput);
        } else {
            self.run_pass();
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn export_text(&mut self, quoting: Quoting) -> NgResult<String> {
        let result = export::export_text(&self.records, &self.config, self.ngram_size, quoting);
        if let Err(NgramError::ExportWithNoData) = &result {
            self.message = Some(NgramError::ExportWithNoData);
        }
        result
    }

    fn refresh(&mut self) {
        if !self.rows.is_empty() {
            self.run_pass();
        }
    }

    fn run_pass(&mut self) {
        match aggregate(&self.rows, &self.config, self.ngram_size) {
            Ok(pass) => {
                self.message = pass.warning();
                self.records = pass.records;
            }
            Err(e) => {
                self.records.clear();
                self.message = Some(e);
            }
        }
    }
}
