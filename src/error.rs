use std::path::{Path, PathBuf};

/// Every error recast can produce. Displayed as user-facing messages.
#[derive(Debug)]
pub enum RecastError {
    NotFound {
        path: PathBuf,
    },
    PermissionDenied {
        path: PathBuf,
    },
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The undetected sentinel reached the normalizer. Only possible when a
    /// caller bypasses the fallback substitution — library misuse, fatal.
    UndetectedDelimiter,
    UnsupportedFormat {
        format: String,
    },
}

impl std::fmt::Display for RecastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                write!(f, "{} [permission denied]", path.display())
            }
            Self::IoError { path, source } => {
                write!(f, "{}: {source}", path.display())
            }
            Self::UndetectedDelimiter => {
                write!(f, "no delimiter resolved; refusing to normalize")
            }
            Self::UnsupportedFormat { format } => {
                write!(f, "unsupported format \"{format}\" — expected csv, json, or md")
            }
        }
    }
}

impl std::error::Error for RecastError {}

impl RecastError {
    /// Exit code for the CLI: 2 for input/IO failures, 3 for configuration
    /// errors.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } | Self::PermissionDenied { .. } | Self::IoError { .. } => 2,
            Self::UndetectedDelimiter | Self::UnsupportedFormat { .. } => 3,
        }
    }

    /// Classify an `io::Error` against the path that produced it.
    pub(crate) fn from_io(path: &Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::IoError {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}
