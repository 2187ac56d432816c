use crate::types::ColumnType;

/// Type-classification thresholds as data. The threshold is an absolute
/// match count against the sample, not a percentage — a file with fewer
/// than `threshold` sampled rows can never classify as integer or float.
/// Coarse on purpose: the verdict feeds the report, not the parser.
#[derive(Debug, Clone)]
pub struct TypePolicy {
    pub threshold: usize,
}

impl Default for TypePolicy {
    fn default() -> Self {
        Self { threshold: 90 }
    }
}

impl TypePolicy {
    /// Classify one column's sampled values. Alphabetic content only wins
    /// when neither numeric count reaches the threshold.
    #[must_use]
    pub fn classify(&self, values: &[&str]) -> ColumnType {
        let integers = values.iter().filter(|v| is_integer(v)).count();
        if integers >= self.threshold {
            return ColumnType::Integer;
        }
        let floats = values.iter().filter(|v| is_float(v)).count();
        if floats >= self.threshold {
            return ColumnType::Float;
        }
        if values
            .iter()
            .any(|v| v.chars().any(char::is_alphabetic))
        {
            ColumnType::Text
        } else {
            ColumnType::Unknown
        }
    }
}

/// Classify every column of the canonical (comma-split) sample. Column
/// count comes from tokenizing line 1, so empty first or last fields still
/// count as fields. Rows shorter than the first simply contribute no value
/// to the missing columns.
#[must_use]
pub fn analyze(sample: &[String], policy: &TypePolicy) -> Vec<ColumnType> {
    let Some(first) = sample.first() else {
        return Vec::new();
    };
    let columns = first.split(',').count();

    (0..columns)
        .map(|i| {
            let values: Vec<&str> = sample.iter().filter_map(|l| l.split(',').nth(i)).collect();
            policy.classify(&values)
        })
        .collect()
}

/// Digits only, at least one.
fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Exactly `digits.digits`. No sign, no exponent, no locale handling.
fn is_float(s: &str) -> bool {
    match s.split_once('.') {
        Some((whole, frac)) => is_integer(whole) && is_integer(frac),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn integer_verdict_at_absolute_threshold() {
        let values: Vec<String> = (0..95).map(|i| i.to_string()).collect();
        let mut refs: Vec<&str> = values.iter().map(String::as_str).collect();
        refs.extend(["x", "y", "z", "w", "v"]);
        assert_eq!(TypePolicy::default().classify(&refs), ColumnType::Integer);
    }

    #[test]
    fn alphabetic_overrides_subthreshold_numeric_count() {
        // 50 integers + 50 words: integer count never reaches 90.
        let nums: Vec<String> = (0..50).map(|i| i.to_string()).collect();
        let mut refs: Vec<&str> = nums.iter().map(String::as_str).collect();
        refs.extend(std::iter::repeat_n("word", 50));
        assert_eq!(TypePolicy::default().classify(&refs), ColumnType::Text);
    }

    #[test]
    fn float_verdict() {
        let values: Vec<String> = (0..100).map(|i| format!("{i}.5")).collect();
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        assert_eq!(TypePolicy::default().classify(&refs), ColumnType::Float);
    }

    #[test]
    fn short_sample_can_never_be_numeric() {
        // 10 clean integers, but the threshold is absolute: unknown.
        let values: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        assert_eq!(TypePolicy::default().classify(&refs), ColumnType::Unknown);
    }

    #[test]
    fn column_count_tokenizes_line_one() {
        // Leading and trailing empty fields are real fields.
        let sample = lines(&[",a,", ",b,"]);
        let verdicts = analyze(&sample, &TypePolicy::default());
        assert_eq!(verdicts.len(), 3);
    }

    #[test]
    fn per_column_verdicts_are_independent() {
        let mut rows: Vec<String> = (0..100).map(|i| format!("{i},{i}.5,row{i}")).collect();
        rows.insert(0, "id,score,label".to_string());
        let verdicts = analyze(&rows, &TypePolicy::default());
        assert_eq!(verdicts[0], ColumnType::Integer);
        assert_eq!(verdicts[1], ColumnType::Float);
        assert_eq!(verdicts[2], ColumnType::Text);
    }

    #[test]
    fn empty_sample_has_no_columns() {
        assert!(analyze(&[], &TypePolicy::default()).is_empty());
    }

    #[test]
    fn float_pattern_is_strict() {
        assert!(is_float("3.5"));
        assert!(!is_float("3."));
        assert!(!is_float(".5"));
        assert!(!is_float("3"));
        assert!(!is_float("-3.5"));
        assert!(!is_float("1.2.3"));
    }
}
