//! Escaping for LIKE patterns.

/// Escape character used in every `LIKE ... ESCAPE` clause.
pub const LIKE_ESCAPE: char = '\\';

/// Escape `%`, `_` and the escape character itself so user input matches
/// literally inside a LIKE pattern.
pub fn escape_like(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        match c {
            '%' | '_' | LIKE_ESCAPE => {
                result.push(LIKE_ESCAPE);
                result.push(c);
            }
            c => result.push(c),
        }
    }
    result
}

/// Build a prefix pattern: the escaped keyword followed by `%`.
#[inline]
pub fn prefix_pattern(keyword: &str) -> String {
    let mut pattern = escape_like(keyword);
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_escape_like_basic() {
        assert_eq!(escape_like("apple"), "apple");
    }

    #[rstest]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("50%_off"), r"50\%\_off");
    }

    #[rstest]
    fn test_escape_like_backslash() {
        assert_eq!(escape_like(r"a\b"), r"a\\b");
    }

    #[rstest]
    fn test_prefix_pattern() {
        assert_eq!(prefix_pattern("ap"), "ap%");
        assert_eq!(prefix_pattern(""), "%");
    }
}
