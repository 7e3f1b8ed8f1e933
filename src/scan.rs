use std::path::{Path, PathBuf};

use license_guess::{License, LicenseError};
use tracing::debug;

use crate::config::{apply_policy, Config};
use crate::models::{PolicyVerdict, ScanResult, ScanStatus};

/// Inspect one path: a directory is searched for its license file, anything
/// else is read as the license file itself.
pub fn scan_path(config: &Config, path: &Path) -> ScanResult {
    let outcome = if path.is_dir() {
        License::from_dir(path)
    } else {
        License::from_file(path)
    };
    to_result(config, path.to_path_buf(), outcome)
}

/// Classify text that did not come from disk, e.g. standard input.
pub fn scan_text(config: &Config, label: &str, text: String) -> ScanResult {
    let mut license = License::new("", text);
    let outcome = license.guess_type().map(|()| license);
    to_result(config, PathBuf::from(label), outcome)
}

fn to_result(config: &Config, path: PathBuf, outcome: Result<License, LicenseError>) -> ScanResult {
    let (status, license_type, files, detail) = match outcome {
        Ok(license) => (
            ScanStatus::Identified,
            Some(license.license_type),
            license.file.into_iter().collect(),
            None,
        ),
        Err(err) => {
            let detail = Some(err.to_string());
            match err {
                LicenseError::UnrecognizedType => (ScanStatus::Unrecognized, None, Vec::new(), detail),
                LicenseError::NoLicenseFile { .. } => (ScanStatus::Missing, None, Vec::new(), detail),
                LicenseError::MultipleLicenseFiles { files, .. } => {
                    (ScanStatus::Ambiguous, None, files, detail)
                }
                LicenseError::Unreadable { .. } => (ScanStatus::Unreadable, None, Vec::new(), detail),
            }
        }
    };

    let verdict = apply_policy(config, status, license_type.as_deref());
    debug!(path = %path.display(), %status, %verdict, "scanned");

    ScanResult {
        path,
        status,
        license_type,
        files,
        detail,
        verdict,
    }
}

/// Whether any result should fail the run.
pub fn has_errors(results: &[ScanResult]) -> bool {
    results.iter().any(|r| r.verdict == PolicyVerdict::Error)
}
