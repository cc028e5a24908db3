use crate::error::{NgResult, NgramError};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Smallest and largest n-gram size the CLI accepts.
pub const MIN_NGRAM_SIZE: usize = 1;
pub const MAX_NGRAM_SIZE: usize = 5;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Reducer {
    #[strum(to_string = "SUM")]
    #[serde(rename = "SUM", alias = "sum")]
    Sum,
    #[strum(to_string = "AVG", serialize = "AVERAGE")]
    #[serde(rename = "AVG", alias = "avg", alias = "AVERAGE")]
    Average,
}

impl Reducer {
    pub fn reduce(&self, samples: &[f64]) -> Option<f64> {
        if samples.is_empty() {
            return None;
        }
        let sum: f64 = samples.iter().sum();
        match self {
            Self::Sum => Some(sum),
            Self::Average => Some(sum / samples.len() as f64),
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// One positional metric column. Slot `i` always reads raw field `i + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSlot {
    pub name: String,
    pub reducer: Reducer,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl MetricSlot {
    pub fn new(name: impl Into<String>, reducer: Reducer) -> Self {
        Self {
            name: name.into(),
            reducer,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Column label used by the export header and the report table.
    pub fn label(&self) -> String {
        format!("{} of {}", self.reducer, self.name)
    }
}

/// Parses `NAME:REDUCER[:on|off]`.
impl FromStr for MetricSlot {
    type Err = NgramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        if parts.len() < 2 || parts.len() > 3 || parts[0].is_empty() {
            return Err(NgramError::Config(format!(
                "Metric '{}' must look like NAME:SUM|AVG[:on|off]",
                s
            )));
        }

        let reducer = Reducer::from_str(parts[1])
            .map_err(|_| NgramError::Config(format!("Unknown reducer '{}'", parts[1])))?;

        let enabled = match parts.get(2).map(|p| p.to_ascii_lowercase()) {
            None => true,
            Some(flag) => match flag.as_str() {
                "on" | "true" | "yes" => true,
                "off" | "false" | "no" => false,
                other => {
                    return Err(NgramError::Config(format!(
                        "Metric flag '{}' must be on or off",
                        other
                    )))
                }
            },
        };

        Ok(Self {
            name: parts[0].to_string(),
            reducer,
            enabled,
        })
    }
}

/// Ordered metric configuration, positionally bound to the raw-row metric fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricConfig {
    slots: Vec<MetricSlot>,
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self::new(vec![
            MetricSlot::new("Clicks", Reducer::Sum),
            MetricSlot::new("Impressions", Reducer::Sum),
            MetricSlot::new("CTR", Reducer::Average),
            MetricSlot::new("Position", Reducer::Average),
        ])
    }
}

impl MetricConfig {
    pub fn new(slots: Vec<MetricSlot>) -> Self {
        Self { slots }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> NgResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn slots(&self) -> &[MetricSlot] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [MetricSlot] {
        &mut self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Enabled slots with their positional index.
    pub fn enabled(&self) -> impl Iterator<Item = (usize, &MetricSlot)> {
        self.slots.iter().enumerate().filter(|(_, s)| s.enabled)
    }

    /// Lowest-index enabled slot; it drives ranking.
    pub fn ranking_slot(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.enabled)
    }

    pub fn set_enabled(&mut self, index: usize, enabled: bool) -> NgResult<()> {
        let len = self.slots.len();
        let slot = self.slots.get_mut(index).ok_or_else(|| {
            NgramError::Config(format!(
                "Metric index {} out of range (have {} metric(s))",
                index, len
            ))
        })?;
        slot.enabled = enabled;
        Ok(())
    }
}

/// Options shared by every subcommand that runs a pass.
#[derive(Args, Debug, Clone)]
pub struct AnalysisParams {
    /// N-gram size
    #[arg(short = 'n', long = "ngram", default_value_t = 1,
          value_parser = clap::value_parser!(u8).range(MIN_NGRAM_SIZE as i64..=MAX_NGRAM_SIZE as i64))]
    pub ngram: u8,

    /// Metric columns in input order, e.g. `--metric Clicks:SUM --metric CTR:AVG:off`
    #[arg(short, long = "metric")]
    pub metrics: Vec<MetricSlot>,

    /// JSON file holding the metric configuration
    #[arg(long, conflicts_with = "metrics")]
    pub metrics_file: Option<String>,

    /// Zero-based metric index to disable (repeatable)
    #[arg(long = "disable")]
    pub disable: Vec<usize>,
}

impl AnalysisParams {
    /// Resolves the metric configuration: file, then explicit flags, then defaults.
    pub fn metric_config(&self) -> NgResult<MetricConfig> {
        let mut config = if let Some(path) = &self.metrics_file {
            MetricConfig::load_from_file(path)?
        } else if !self.metrics.is_empty() {
            MetricConfig::new(self.metrics.clone())
        } else {
            MetricConfig::default()
        };

        for &index in &self.disable {
            config.set_enabled(index, false)?;
        }
        Ok(config)
    }

    pub fn ngram_size(&self) -> usize {
        self.ngram as usize
    }
}
