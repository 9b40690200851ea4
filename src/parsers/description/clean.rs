use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\s+").expect("whitespace pattern is valid"));

/// Trim both ends and collapse every run of two or more whitespace characters
/// into a single space. A lone tab or newline is left as is.
pub fn clean_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Gutschrift Lohn", "Gutschrift Lohn")]
    #[case("  Auszahlung   Karte  ", "Auszahlung Karte")]
    #[case("A \t B", "A B")]
    #[case("A\tB", "A\tB")]
    #[case("", "")]
    #[case("    ", "")]
    fn test_clean_whitespace(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(clean_whitespace(input), expected);
    }
}
