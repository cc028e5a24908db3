/// Splits a phrase into lower-cased tokens on any run of whitespace.
pub fn tokenize(phrase: &str) -> Vec<String> {
    phrase
        .split_whitespace()
        .map(|token| token.to_lowercase())
        .collect()
}

/// Every contiguous `n`-token window of `phrase`, left to right, joined by single spaces.
///
/// Phrases shorter than `n` tokens (and `n == 0`) yield nothing.
pub fn generate_ngrams(phrase: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    tokenize(phrase)
        .windows(n)
        .map(|window| window.join(" "))
        .collect()
}
