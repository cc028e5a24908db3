#![allow(dead_code)]

use ngramalyzer::config::{MetricConfig, MetricSlot, Reducer};
use ngramalyzer::input::RawRow;

/// Clicks=SUM, CTR=AVG.
pub fn clicks_ctr() -> MetricConfig {
    MetricConfig::new(vec![
        MetricSlot::new("Clicks", Reducer::Sum),
        MetricSlot::new("CTR", Reducer::Average),
    ])
}

pub fn rows(data: &[(&str, &[&str])]) -> Vec<RawRow> {
    data.iter()
        .enumerate()
        .map(|(i, (phrase, metrics))| RawRow {
            line: i + 2,
            ..RawRow::new(*phrase, metrics)
        })
        .collect()
}

pub const SEARCH_CONSOLE_TSV: &str = "Top queries\tClicks\tImpressions\tCTR\tPosition
running shoes\t120\t4000\t3.0\t4.2
red running shoes\t30\t900\t3.33\t6.1
Shoes for Running\t12\t600\t2.0\t8.5
trail shoes\t8\t700\t1.14\t11.0
";
