use std::path::PathBuf;

use serde::Serialize;

/// Outcome of scanning one path given on the command line.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub path: PathBuf,
    pub status: ScanStatus,
    /// Catalog identifier when the license was identified.
    pub license_type: Option<String>,
    /// License file the type was read from, or the candidates when ambiguous.
    pub files: Vec<PathBuf>,
    /// Error text for anything short of identification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub verdict: PolicyVerdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Identified,
    Unrecognized,
    Missing,
    Ambiguous,
    Unreadable,
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanStatus::Identified => write!(f, "identified"),
            ScanStatus::Unrecognized => write!(f, "unrecognized"),
            ScanStatus::Missing => write!(f, "missing"),
            ScanStatus::Ambiguous => write!(f, "ambiguous"),
            ScanStatus::Unreadable => write!(f, "unreadable"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyVerdict {
    Pass,
    Warn,
    Error,
}

impl std::fmt::Display for PolicyVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyVerdict::Pass => write!(f, "pass"),
            PolicyVerdict::Warn => write!(f, "warn"),
            PolicyVerdict::Error => write!(f, "error"),
        }
    }
}
