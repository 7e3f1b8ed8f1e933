use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n\t ]+").expect("valid whitespace pattern"));

/// Canonicalize license text for comparison.
///
/// Lowercases, drops commas, collapses every run of CR/LF/tab/space into one
/// space and trims. Commas go before the whitespace pass so that `"a , b"`
/// yields `"a b"` and the function stays idempotent.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase().replace(',', "");
    WHITESPACE_RUN.replace_all(&lower, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        for (input, expected) in [
            ("HeLlO wOrLd", "hello world"),
            ("hello  world", "hello world"),
            ("hello\r\nworld", "hello world"),
            ("hello\nworld", "hello world"),
            ("hello, world", "hello world"),
            ("\thello\tworld\n", "hello world"),
        ] {
            assert_eq!(normalize(input), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_idempotent() {
        for input in ["a , b", "  Foo,\r\n\r\n BAR ,baz  ", "", ",,,", "x\t,\ty"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_comma_between_spaces_collapses() {
        assert_eq!(normalize("a , b"), "a b");
    }
}
