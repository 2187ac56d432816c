pub mod json;
pub mod markdown;

use std::fs;
use std::path::Path;

use crate::error::RecastError;
use crate::normalize::Canonical;

/// Target output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
    Markdown,
}

impl Format {
    /// Format identifiers are validated here, at render time rather than
    /// at CLI parse time, so the analysis summary is already on screen
    /// when a bad identifier fails the run.
    pub fn parse(s: &str) -> Result<Self, RecastError> {
        match s {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "md" => Ok(Self::Markdown),
            other => Err(RecastError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

/// Convert the canonical form into the requested format at `output`.
/// Consumes the canonical temp file: CSV persists it in place (identity
/// rendering), the other formats read it and let it drop. On any error no
/// output file exists and the temp is gone.
pub fn render(canonical: Canonical, format: &str, output: &Path) -> Result<(), RecastError> {
    let format = Format::parse(format)?;

    match format {
        Format::Csv => {
            canonical
                .file
                .persist(output)
                .map_err(|e| RecastError::from_io(output, e.error))?;
            Ok(())
        }
        Format::Json => {
            let body = fs::read_to_string(canonical.file.path())
                .map_err(|e| RecastError::from_io(canonical.file.path(), e))?;
            fs::write(output, json::render(&body)).map_err(|e| RecastError::from_io(output, e))
        }
        Format::Markdown => {
            let body = fs::read_to_string(canonical.file.path())
                .map_err(|e| RecastError::from_io(canonical.file.path(), e))?;
            fs::write(output, markdown::render(&body)).map_err(|e| RecastError::from_io(output, e))
        }
    }
}
