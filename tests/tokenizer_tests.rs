use ngramalyzer::tokenizer::{generate_ngrams, tokenize};
use rstest::rstest;

#[rstest]
#[case("a b c d", 1, &["a", "b", "c", "d"])]
#[case("a b c d", 2, &["a b", "b c", "c d"])]
#[case("a b c d", 3, &["a b c", "b c d"])]
#[case("a b c d", 4, &["a b c d"])]
#[case("a b c d", 5, &[])]
#[case("", 1, &[])]
#[case("   ", 1, &[])]
fn test_sliding_windows(#[case] phrase: &str, #[case] n: usize, #[case] expected: &[&str]) {
    assert_eq!(generate_ngrams(phrase, n), expected);
}

#[test]
fn test_case_is_normalized_before_windowing() {
    assert_eq!(generate_ngrams("Foo BAR", 2), generate_ngrams("foo bar", 2));
    assert_eq!(generate_ngrams("Foo BAR", 1), vec!["foo", "bar"]);
}

#[test]
fn test_whitespace_runs_and_edges_produce_no_empty_tokens() {
    assert_eq!(tokenize("\t best   seo\ttools  "), vec!["best", "seo", "tools"]);
    assert_eq!(generate_ngrams(" best  seo ", 2), vec!["best seo"]);
}

#[test]
fn test_repeated_tokens_keep_every_window() {
    assert_eq!(generate_ngrams("to be or not to be", 2), vec![
        "to be", "be or", "or not", "not to", "to be"
    ]);
}

#[test]
fn test_unicode_lowercasing() {
    assert_eq!(tokenize("ÜBER Straße"), vec!["über", "straße"]);
}
