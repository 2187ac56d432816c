use std::path::PathBuf;

use crate::detect::column::TypePolicy;
use crate::detect::delimiter::DelimiterPolicy;

/// Tunables for a single run, passed into each stage explicitly so tests
/// can shrink samples and swap policies instead of fighting ambient
/// constants.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lines read for every detection heuristic, regardless of file size.
    /// Detection accuracy is probabilistic on purpose.
    pub sample_lines: usize,
    /// Lines shown at each end of the output preview.
    pub preview_lines: usize,
    /// Substituted when detection fails. Failure is non-fatal — a warning
    /// is surfaced and the run continues.
    pub fallback_delimiter: char,
    /// Directory for default output paths, created if absent.
    pub output_dir: PathBuf,
    pub delimiter_policy: DelimiterPolicy,
    pub type_policy: TypePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_lines: 100,
            preview_lines: 10,
            fallback_delimiter: ' ',
            output_dir: PathBuf::from("structured"),
            delimiter_policy: DelimiterPolicy::default(),
            type_policy: TypePolicy::default(),
        }
    }
}
