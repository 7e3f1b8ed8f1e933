//! Error taxonomy for license loading and classification.
//!
//! Callers can tell an absent license file ([`LicenseError::NoLicenseFile`])
//! apart from an ambiguous directory ([`LicenseError::MultipleLicenseFiles`]).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LicenseError {
    /// The path does not exist, has the wrong kind, or could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text matched no catalog entry, exactly or by abbreviation.
    #[error("license type not recognized")]
    UnrecognizedType,

    #[error("no license file found in {}", dir.display())]
    NoLicenseFile { dir: PathBuf },

    /// More than one candidate file; the scan never picks one.
    #[error("multiple license files found in {}: {}", dir.display(), list_paths(files))]
    MultipleLicenseFiles { dir: PathBuf, files: Vec<PathBuf> },
}

fn list_paths(files: &[PathBuf]) -> String {
    files
        .iter()
        .filter_map(|f| f.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(", ")
}
