use crate::config::MetricConfig;
use crate::engine::ResultRecord;
use crate::error::{NgResult, NgramError};
use clap::ValueEnum;
use csv::{QuoteStyle, WriterBuilder};

/// How n-gram text is written into the comma-delimited export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Quoting {
    /// Fields are written verbatim. Commas inside an n-gram shift the columns.
    #[default]
    Never,
    /// RFC 4180 quoting for fields holding a delimiter, quote or newline.
    Necessary,
}

pub fn default_export_filename(n: usize) -> String {
    format!("{}-gram_frequency_and_metrics.csv", n)
}

/// Fixed 4-decimal formatting; absent values become an empty field.
pub fn format_metric(value: Option<f64>) -> String {
    value.map(|v| format!("{:.4}", v)).unwrap_or_default()
}

fn header(config: &MetricConfig, n: usize) -> Vec<String> {
    let mut cols = vec![format!("{}-Gram", n), "Count".to_string()];
    cols.extend(config.enabled().map(|(_, slot)| slot.label()));
    cols
}

fn data_row(record: &ResultRecord, config: &MetricConfig) -> Vec<String> {
    let mut cols = vec![record.text.clone(), record.count.to_string()];
    cols.extend(config.enabled().map(|(i, _)| format_metric(record.metric(i))));
    cols
}

/// Serializes records in the order given, one column per enabled metric.
pub fn export_text(
    records: &[ResultRecord],
    config: &MetricConfig,
    n: usize,
    quoting: Quoting,
) -> NgResult<String> {
    if records.is_empty() {
        return Err(NgramError::ExportWithNoData);
    }

    let lines =
        std::iter::once(header(config, n)).chain(records.iter().map(|r| data_row(r, config)));

    match quoting {
        Quoting::Never => Ok(lines
            .map(|cols| cols.join(","))
            .collect::<Vec<_>>()
            .join("\n")),
        Quoting::Necessary => {
            let mut wtr = WriterBuilder::new()
                .quote_style(QuoteStyle::Necessary)
                .from_writer(Vec::new());
            for cols in lines {
                wtr.write_record(&cols)?;
            }
            let bytes = wtr
                .into_inner()
                .map_err(|e| NgramError::Io(e.into_error()))?;
            let text = String::from_utf8_lossy(&bytes);
            Ok(text.trim_end_matches('\n').to_string())
        }
    }
}
