use serde::Serialize;

/// Outcome of delimiter resolution. `Undetected` is the sentinel for a
/// sample containing none of the candidate separators — callers are
/// expected to substitute the configured fallback before normalizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Resolved(char),
    Undetected,
}

/// Where the resolved delimiter came from — carried into the report so the
/// user can tell an authoritative override from a best-effort guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DelimiterSource {
    UserSupplied,
    Detected,
    Fallback,
}

impl std::fmt::Display for DelimiterSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserSupplied => write!(f, "user-specified"),
            Self::Detected => write!(f, "detected"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Per-column classification. A detection aid for the report, not a
/// parsing contract — values are never coerced downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnType {
    Integer,
    Float,
    /// Alphabetic content present: free text or mixed values.
    Text,
    /// Too few matching samples to call it anything.
    Unknown,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Text => write!(f, "text"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Printable form of a delimiter character — tabs and spaces would
/// otherwise vanish in terminal output.
#[must_use]
pub fn display_delimiter(c: char) -> String {
    match c {
        '\t' => "'\\t'".to_string(),
        ' ' => "' '".to_string(),
        other => format!("'{other}'"),
    }
}
