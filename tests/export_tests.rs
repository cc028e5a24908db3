mod common;

use common::{clicks_ctr, rows};
use ngramalyzer::config::MetricConfig;
use ngramalyzer::engine::{aggregate, ResultRecord};
use ngramalyzer::error::NgramError;
use ngramalyzer::export::{default_export_filename, export_text, format_metric, Quoting};
use regex::Regex;
use rstest::rstest;

fn record(text: &str, count: usize, metrics: Vec<Option<f64>>) -> ResultRecord {
    ResultRecord {
        text: text.to_string(),
        count,
        metrics,
    }
}

#[test]
fn test_header_and_rows() {
    let records = vec![
        record("b", 2, vec![Some(30.0), Some(3.0)]),
        record("a", 1, vec![Some(10.0), Some(5.0)]),
    ];
    let text = export_text(&records, &clicks_ctr(), 1, Quoting::Never).unwrap();
    assert_eq!(
        text,
        "1-Gram,Count,SUM of Clicks,AVG of CTR\nb,2,30.0000,3.0000\na,1,10.0000,5.0000"
    );
}

#[test]
fn test_disabled_columns_compact() {
    let mut config = clicks_ctr();
    config.set_enabled(0, false).unwrap();
    let records = vec![record("a b", 4, vec![None, Some(0.123456)])];

    let text = export_text(&records, &config, 2, Quoting::Never).unwrap();
    assert_eq!(text, "2-Gram,Count,AVG of CTR\na b,4,0.1235");
}

#[test]
fn test_absent_value_is_empty_field() {
    let records = vec![record("x", 1, vec![None, Some(2.0)])];
    let text = export_text(&records, &clicks_ctr(), 1, Quoting::Never).unwrap();
    assert_eq!(text.lines().nth(1), Some("x,1,,2.0000"));
}

#[test]
fn test_no_enabled_metrics_has_two_columns() {
    let mut config = clicks_ctr();
    config.set_enabled(0, false).unwrap();
    config.set_enabled(1, false).unwrap();
    let records = vec![record("x", 3, vec![None, None])];

    let text = export_text(&records, &config, 1, Quoting::Never).unwrap();
    assert_eq!(text, "1-Gram,Count\nx,3");
}

#[test]
fn test_order_is_preserved_verbatim() {
    // Deliberately not ranked; the serializer must not re-sort.
    let records = vec![
        record("small", 1, vec![Some(1.0), Some(1.0)]),
        record("big", 9, vec![Some(99.0), Some(1.0)]),
    ];
    let text = export_text(&records, &clicks_ctr(), 1, Quoting::Never).unwrap();
    let first: Vec<&str> = text
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(first, vec!["small", "big"]);
}

#[test]
fn test_field_counts_match_header() {
    let rows = rows(&[
        ("alpha beta", &["1", "2", "3", "4"]),
        ("beta gamma", &["5", "6", "7", "8"]),
        ("gamma", &["bad", "6", "7", "8"]),
    ]);
    let mut config = MetricConfig::default();
    config.set_enabled(2, false).unwrap();
    let pass = aggregate(&rows, &config, 1).unwrap();

    let text = export_text(&pass.records, &config, 1, Quoting::Never).unwrap();
    let mut lines = text.lines();
    let header_cols = lines.next().unwrap().split(',').count();
    assert_eq!(header_cols, 2 + 3);

    let row_re = Regex::new(r"^[a-z]+,\d+(,-?\d+\.\d{4}){3}$").unwrap();
    for line in lines {
        assert_eq!(line.split(',').count(), header_cols);
        assert!(row_re.is_match(line), "malformed row: {}", line);
    }
}

#[test]
fn test_commas_are_not_escaped_by_default() {
    let records = vec![record("red, blue", 1, vec![Some(1.0), Some(1.0)])];
    let text = export_text(&records, &clicks_ctr(), 1, Quoting::Never).unwrap();
    assert_eq!(text.lines().nth(1), Some("red, blue,1,1.0000,1.0000"));
}

#[test]
fn test_necessary_quoting_escapes_commas_and_quotes() {
    let records = vec![
        record("red, blue", 1, vec![Some(1.0), None]),
        record("\"best\"", 2, vec![Some(2.0), Some(0.5)]),
    ];
    let text = export_text(&records, &clicks_ctr(), 1, Quoting::Necessary).unwrap();
    assert_eq!(
        text,
        "1-Gram,Count,SUM of Clicks,AVG of CTR\n\"red, blue\",1,1.0000,\n\"\"\"best\"\"\",2,2.0000,0.5000"
    );
}

#[test]
fn test_export_without_records_is_error() {
    let err = export_text(&[], &clicks_ctr(), 1, Quoting::Never).unwrap_err();
    assert!(matches!(err, NgramError::ExportWithNoData));
}

#[rstest]
#[case(Some(3.0), "3.0000")]
#[case(Some(2.0 / 3.0), "0.6667")]
#[case(Some(-1.5), "-1.5000")]
#[case(Some(1234567.0), "1234567.0000")]
#[case(None, "")]
fn test_fixed_point_formatting(#[case] value: Option<f64>, #[case] expected: &str) {
    assert_eq!(format_metric(value), expected);
}

#[test]
fn test_default_filename() {
    assert_eq!(default_export_filename(2), "2-gram_frequency_and_metrics.csv");
}
