use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::RecastError;
use crate::types::{display_delimiter, ColumnType, DelimiterSource};

/// Everything the analysis learned about one input file. Built once,
/// emitted once (text or `--json`), never persisted.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: String,
    pub skip: usize,
    pub rows: usize,
    pub delimiter: char,
    pub delimiter_source: DelimiterSource,
    pub columns: usize,
    pub header: bool,
    pub column_types: Vec<ColumnType>,
}

impl AnalysisReport {
    /// Fixed-order textual summary.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "# {} → {} [{}]",
            self.input.display(),
            self.output.display(),
            self.format
        );
        let _ = writeln!(out, "skip:       {}", self.skip);
        let _ = writeln!(out, "rows:       {}", self.rows);
        let _ = writeln!(
            out,
            "delimiter:  {} ({})",
            display_delimiter(self.delimiter),
            self.delimiter_source
        );
        let _ = writeln!(out, "columns:    {}", self.columns);
        let _ = writeln!(out, "header:     {}", if self.header { "yes" } else { "no" });
        for (i, verdict) in self.column_types.iter().enumerate() {
            let _ = writeln!(out, "column {}:   {verdict}", i + 1);
        }
        out
    }
}

/// Head/tail preview of the output file: first `n` lines, a gap marker,
/// last `n` lines. Only called once the output file exists — no output
/// means no preview.
pub fn preview(path: &Path, n: usize) -> Result<String, RecastError> {
    let buf = fs::read(path).map_err(|e| RecastError::from_io(path, e))?;
    if buf.is_empty() {
        return Ok("(empty)".to_string());
    }

    // Count lines via memchr — O(n) scan; a trailing newline adds nothing
    let mut total = memchr::memchr_iter(b'\n', &buf).count();
    if buf.last() != Some(&b'\n') {
        total += 1;
    }
    let content = String::from_utf8_lossy(&buf);
    let lines: Vec<&str> = content.lines().collect();

    let mut out = Vec::new();
    if total <= 2 * n {
        out.extend(lines.iter().map(ToString::to_string));
    } else {
        for line in &lines[..n] {
            out.push((*line).to_string());
        }
        out.push(format!("... {} lines omitted", total - 2 * n));
        for line in &lines[lines.len() - n..] {
            out.push((*line).to_string());
        }
    }
    Ok(out.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn report() -> AnalysisReport {
        AnalysisReport {
            input: PathBuf::from("data.tsv"),
            output: PathBuf::from("structured/data_structured.csv"),
            format: "csv".to_string(),
            skip: 1,
            rows: 42,
            delimiter: '\t',
            delimiter_source: DelimiterSource::Detected,
            columns: 3,
            header: true,
            column_types: vec![ColumnType::Integer, ColumnType::Float, ColumnType::Text],
        }
    }

    #[test]
    fn text_summary_has_fixed_order() {
        let text = report().render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("# data.tsv → structured/data_structured.csv"));
        assert!(lines[1].starts_with("skip:"));
        assert!(lines[2].starts_with("rows:"));
        assert!(lines[3].starts_with("delimiter:"));
        assert!(lines[4].starts_with("columns:"));
        assert!(lines[5].starts_with("header:"));
        assert_eq!(lines[6], "column 1:   integer");
        assert_eq!(lines[8], "column 3:   text");
    }

    #[test]
    fn tab_delimiter_is_visible_in_summary() {
        let text = report().render_text();
        assert!(text.contains("'\\t' (detected)"));
    }

    #[test]
    fn report_serializes_for_json_mode() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["rows"], 42);
        assert_eq!(json["delimiter_source"], "detected");
        assert_eq!(json["column_types"][0], "integer");
    }

    #[test]
    fn short_output_previews_in_full() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"a\nb\nc\n").unwrap();
        let p = preview(f.path(), 10).unwrap();
        assert_eq!(p, "a\nb\nc");
    }

    #[test]
    fn long_output_gets_gap_marker() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        for i in 0..50 {
            writeln!(f, "line {i}").unwrap();
        }
        let p = preview(f.path(), 10).unwrap();
        let lines: Vec<&str> = p.lines().collect();
        assert_eq!(lines.len(), 21);
        assert_eq!(lines[0], "line 0");
        assert_eq!(lines[10], "... 30 lines omitted");
        assert_eq!(lines[20], "line 49");
    }

    #[test]
    fn empty_output_previews_as_empty() {
        let f = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(preview(f.path(), 10).unwrap(), "(empty)");
    }
}
