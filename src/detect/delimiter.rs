use crate::types::{Delimiter, DelimiterSource};

/// Candidate separators and their precedence, held as data so the scoring
/// rule is testable in isolation and the candidate set is swappable.
///
/// The cascade is deliberately asymmetric: the primary must beat both
/// rivals outright, the secondary only has to beat the primary, and the
/// last resort merely has to appear at all. Counts come from the sample
/// prefix, never the whole file.
#[derive(Debug, Clone)]
pub struct DelimiterPolicy {
    pub primary: char,
    pub secondary: char,
    pub last_resort: char,
}

impl Default for DelimiterPolicy {
    fn default() -> Self {
        Self {
            primary: ',',
            secondary: '\t',
            last_resort: ' ',
        }
    }
}

impl DelimiterPolicy {
    /// Score the sample and pick a separator. `None` means the sample
    /// contains no candidate at all — the undetected sentinel.
    #[must_use]
    pub fn detect(&self, sample: &[String]) -> Option<char> {
        let count = |c: char| -> usize { sample.iter().map(|l| l.matches(c).count()).sum() };

        let primary = count(self.primary);
        let secondary = count(self.secondary);
        let last = count(self.last_resort);

        if primary > secondary && primary > last {
            Some(self.primary)
        } else if secondary > primary {
            Some(self.secondary)
        } else if last > 0 {
            Some(self.last_resort)
        } else {
            None
        }
    }

    /// Resolve the delimiter for a run. An explicit override is
    /// authoritative and skips detection entirely; a failed detection
    /// falls back to `fallback` (non-fatal — the caller surfaces a
    /// warning from the `Fallback` provenance).
    #[must_use]
    pub fn resolve(
        &self,
        user_override: Option<char>,
        sample: &[String],
        fallback: char,
    ) -> (Delimiter, DelimiterSource) {
        if let Some(c) = user_override {
            return (Delimiter::Resolved(c), DelimiterSource::UserSupplied);
        }
        match self.detect(sample) {
            Some(c) => (Delimiter::Resolved(c), DelimiterSource::Detected),
            None => (Delimiter::Resolved(fallback), DelimiterSource::Fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn comma_wins_when_strictly_most_frequent() {
        let s = sample(&["a,b,c", "1,2,3"]);
        assert_eq!(DelimiterPolicy::default().detect(&s), Some(','));
    }

    #[test]
    fn tab_wins_when_it_beats_comma() {
        let s = sample(&["a\tb\tc", "1\t2\t3"]);
        assert_eq!(DelimiterPolicy::default().detect(&s), Some('\t'));
    }

    // The secondary only has to beat the primary — a larger space count
    // does not save comma or promote space.
    #[test]
    fn tab_beats_comma_even_when_space_dominates() {
        let s = sample(&["a b c d e f", "1\t2\t3", "x,y"]);
        assert_eq!(DelimiterPolicy::default().detect(&s), Some('\t'));
    }

    #[test]
    fn space_wins_on_tie_between_comma_and_tab() {
        let s = sample(&["a,b\tc d"]);
        assert_eq!(DelimiterPolicy::default().detect(&s), Some(' '));
    }

    #[test]
    fn no_candidates_is_undetected() {
        let s = sample(&["abc", "def"]);
        assert_eq!(DelimiterPolicy::default().detect(&s), None);
    }

    #[test]
    fn override_short_circuits_detection() {
        // Sample is all commas; the override still wins.
        let s = sample(&["a,b,c", "1,2,3"]);
        let (delim, source) = DelimiterPolicy::default().resolve(Some(';'), &s, ' ');
        assert_eq!(delim, Delimiter::Resolved(';'));
        assert_eq!(source, DelimiterSource::UserSupplied);
    }

    #[test]
    fn undetected_falls_back_with_provenance() {
        let s = sample(&["abc"]);
        let (delim, source) = DelimiterPolicy::default().resolve(None, &s, ' ');
        assert_eq!(delim, Delimiter::Resolved(' '));
        assert_eq!(source, DelimiterSource::Fallback);
    }

    #[test]
    fn custom_candidate_set() {
        let policy = DelimiterPolicy {
            primary: ';',
            secondary: '|',
            last_resort: ':',
        };
        let s = sample(&["a;b;c", "1;2;3"]);
        assert_eq!(policy.detect(&s), Some(';'));
    }
}
