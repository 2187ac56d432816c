#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions, // Rust naming conventions
    clippy::missing_errors_doc,      // error enum documents itself
    clippy::missing_panics_doc
)]

pub mod config;
pub mod detect;
pub mod error;
pub mod normalize;
pub mod render;
pub mod report;
pub mod sample;
pub mod types;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use config::Config;
use error::RecastError;
use normalize::Canonical;
use report::AnalysisReport;
use types::{display_delimiter, Delimiter, DelimiterSource};

/// Inputs the CLI collaborator hands to the core for one run.
#[derive(Debug, Clone)]
pub struct Options {
    pub input: PathBuf,
    /// Explicit output path; `None` means the default
    /// `<output_dir>/<stem>_structured.<format>`.
    pub output: Option<PathBuf>,
    /// Explicit delimiter — authoritative, skips detection.
    pub delimiter: Option<char>,
    /// Leading lines excluded from all record processing.
    pub skip: usize,
    /// Format identifier, validated only when rendering starts.
    pub format: String,
}

/// Everything known after the detection and normalization stages, before
/// any output file exists. Holds the canonical temp file, so dropping an
/// `Analysis` cleans up without a trace.
#[derive(Debug)]
pub struct Analysis {
    pub report: AnalysisReport,
    pub warning: Option<String>,
    canonical: Canonical,
}

/// Run the inference stages: sample the raw input, resolve the delimiter,
/// normalize into the canonical comma form, then classify header and
/// column types off a canonical sample. No output file is written here.
pub fn analyze(opts: &Options, config: &Config) -> Result<Analysis, RecastError> {
    let raw = sample::head_lines(&opts.input, config.sample_lines)?;

    let (delimiter, source) =
        config
            .delimiter_policy
            .resolve(opts.delimiter, &raw, config.fallback_delimiter);
    let Delimiter::Resolved(delim_char) = delimiter else {
        return Err(RecastError::UndetectedDelimiter);
    };
    let warning = (source == DelimiterSource::Fallback).then(|| {
        format!(
            "no delimiter detected in sample; falling back to {}",
            display_delimiter(config.fallback_delimiter)
        )
    });

    let output = resolve_output_path(opts, config);
    let out_dir = output.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = out_dir {
        fs::create_dir_all(dir).map_err(|e| RecastError::from_io(dir, e))?;
    }
    let tmp_dir = out_dir.unwrap_or(Path::new("."));

    let canonical = normalize::normalize(&opts.input, delimiter, opts.skip, tmp_dir)?;

    // Header and type detection read the canonical (comma-split) form, so
    // they see exactly what the renderers will see.
    let canon_sample = sample::head_lines(canonical.file.path(), config.sample_lines)?;
    let header = match canon_sample.first() {
        Some(first) => detect::header::looks_like_header(first, canon_sample.get(1).map(String::as_str)),
        None => false,
    };
    let column_types = detect::column::analyze(&canon_sample, &config.type_policy);

    let report = AnalysisReport {
        input: opts.input.clone(),
        output,
        format: opts.format.clone(),
        skip: opts.skip,
        rows: canonical.records,
        delimiter: delim_char,
        delimiter_source: source,
        columns: column_types.len(),
        header,
        column_types,
    };

    Ok(Analysis {
        report,
        warning,
        canonical,
    })
}

/// Render the canonical form to the output file. Consumes the analysis:
/// on success the temp file is persisted (csv) or read and dropped; on
/// failure it is dropped and no output exists.
pub fn convert(analysis: Analysis) -> Result<PathBuf, RecastError> {
    let output = analysis.report.output.clone();
    render::render(analysis.canonical, &analysis.report.format, &output)?;
    Ok(output)
}

/// The whole pipeline with console reporting: analyze, print the summary,
/// convert, print the preview. The summary is written before conversion,
/// so a bad format identifier still leaves the analysis on screen —
/// reporting is deliberately not atomic with conversion.
pub fn run(
    opts: &Options,
    config: &Config,
    out: &mut dyn io::Write,
) -> Result<PathBuf, RecastError> {
    let analysis = analyze(opts, config)?;
    if let Some(warning) = &analysis.warning {
        let _ = writeln!(out, "warning: {warning}");
    }
    let _ = write!(out, "{}", analysis.report.render_text());

    let output = convert(analysis)?;

    let preview = report::preview(&output, config.preview_lines)?;
    let _ = writeln!(out, "\npreview:\n{preview}");
    Ok(output)
}

/// `<output_dir>/<stem>_structured.<format>` unless the caller chose a
/// path. The raw format string doubles as the extension — an unsupported
/// identifier never gets as far as creating the file.
fn resolve_output_path(opts: &Options, config: &Config) -> PathBuf {
    if let Some(path) = &opts.output {
        return path.clone();
    }
    let stem = opts
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    config
        .output_dir
        .join(format!("{stem}_structured.{}", opts.format))
}
