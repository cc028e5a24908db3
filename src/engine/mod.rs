pub mod accumulator;
pub mod types;

pub use self::accumulator::{Accumulator, AccumulatorMap};
pub use self::types::{Aggregation, ResultRecord};

use crate::config::MetricConfig;
use crate::error::{NgResult, NgramError, RowError};
use crate::input::RawRow;
use crate::tokenizer::generate_ngrams;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Parses every metric field of `row`, or explains why the row is unusable.
pub fn parse_metrics(row: &RawRow, expected: usize) -> Result<Vec<f64>, RowError> {
    if row.metrics.len() != expected {
        return Err(RowError::FieldCount {
            line: row.line,
            expected,
            found: row.metrics.len(),
        });
    }

    row.metrics
        .iter()
        .enumerate()
        .map(|(field, raw)| match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(RowError::Unparsable {
                line: row.line,
                field: field + 1,
                value: raw.clone(),
            }),
        })
        .collect()
}

/// Groups rows by n-gram, counting occurrences and collecting samples for enabled slots.
pub fn accumulate(
    rows: &[RawRow],
    config: &MetricConfig,
    n: usize,
) -> (AccumulatorMap, Vec<RowError>) {
    let mut map = AccumulatorMap::new();
    let mut rejected = Vec::new();

    for row in rows {
        let values = match parse_metrics(row, config.len()) {
            Ok(v) => v,
            Err(e) => {
                debug!("Rejected {}", e);
                rejected.push(e);
                continue;
            }
        };

        // Repeats inside one phrase count separately.
        for gram in generate_ngrams(&row.phrase, n) {
            map.observe(gram, &values, config);
        }
    }

    (map, rejected)
}

/// Applies each enabled slot's reducer to the collected samples.
pub fn reduce(map: AccumulatorMap, config: &MetricConfig) -> Vec<ResultRecord> {
    map.into_entries()
        .into_iter()
        .map(|(text, acc)| {
            let metrics = config
                .slots()
                .iter()
                .zip(&acc.samples)
                .map(|(slot, samples)| {
                    if slot.enabled {
                        slot.reducer.reduce(samples)
                    } else {
                        None
                    }
                })
                .collect();

            ResultRecord {
                text,
                count: acc.count,
                metrics,
            }
        })
        .collect()
}

/// Sorts descending by the first enabled slot (absent counts as 0), else by count.
/// The sort is stable, so ties (including `-0.0` against `0.0`) keep first-encountered order.
pub fn rank(records: &mut [ResultRecord], config: &MetricConfig) {
    match config.ranking_slot() {
        Some(slot) => records.sort_by(|a, b| {
            let av = a.metric(slot).unwrap_or(0.0);
            let bv = b.metric(slot).unwrap_or(0.0);
            bv.partial_cmp(&av).unwrap_or(Ordering::Equal)
        }),
        None => records.sort_by(|a, b| b.count.cmp(&a.count)),
    }
}

/// Runs one full pass: parse, tokenize, accumulate, reduce, rank.
///
/// Rows with unusable metric fields are dropped and reported on the returned
/// [`Aggregation`]; a pass that accumulates no n-grams at all is an
/// [`NgramError::EmptyResult`].
pub fn aggregate(rows: &[RawRow], config: &MetricConfig, n: usize) -> NgResult<Aggregation> {
    if n == 0 {
        return Err(NgramError::Config("N-gram size must be at least 1".into()));
    }

    let (map, rejected) = accumulate(rows, config, n);

    debug!(
        "Pass n={}: {} rows scanned, {} rejected, {} distinct n-grams",
        n,
        rows.len(),
        rejected.len(),
        map.len()
    );
    if !rejected.is_empty() {
        warn!(
            "⚠️  Dropped {} row(s) with invalid metrics (first: {})",
            rejected.len(),
            rejected[0]
        );
    }

    if map.is_empty() {
        return Err(NgramError::EmptyResult);
    }

    let mut records = reduce(map, config);
    rank(&mut records, config);

    Ok(Aggregation {
        records,
        rejected,
        rows_scanned: rows.len(),
    })
}
