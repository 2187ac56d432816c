/// Coarse header heuristic over the first two lines of skip-adjusted data:
/// a label row has letters, the data row beneath it has none. Purely
/// informational — the verdict never changes how records are parsed.
#[must_use]
pub fn looks_like_header(first: &str, second: Option<&str>) -> bool {
    let has_alpha = |s: &str| s.chars().any(char::is_alphabetic);
    has_alpha(first) && !second.is_some_and(has_alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_over_numbers_is_a_header() {
        assert!(looks_like_header("name,age,score", Some("7,42,3.5")));
    }

    #[test]
    fn numbers_over_numbers_is_not() {
        assert!(!looks_like_header("1,2,3", Some("4,5,6")));
    }

    #[test]
    fn text_in_both_rows_is_not() {
        // Can't tell labels from data when row 2 also has letters.
        assert!(!looks_like_header("name,age", Some("alice,30")));
    }

    #[test]
    fn single_line_file_counts_as_header_when_alphabetic() {
        assert!(looks_like_header("name,age", None));
        assert!(!looks_like_header("1,2", None));
    }
}
