//! License loading and classification.
//!
//! - [`normalize`] — text canonicalization applied before comparison.
//! - [`catalog`] — the fixed table of known license types.
//! - [`classifier`] — exact and abbreviated matching against the catalog.
//! - [`files`] — candidate license file names and the directory scanner.

pub mod catalog;
pub mod classifier;
pub mod files;
pub mod normalize;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LicenseError;

/// A license: its type, raw text and where it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct License {
    /// Catalog identifier; empty until guessed or supplied.
    pub license_type: String,
    /// Raw text as read. Never normalized in place.
    pub text: String,
    /// File the text came from, if any.
    pub file: Option<PathBuf>,
}

impl License {
    /// Build a license from a known type and text. No classification.
    pub fn new(license_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            license_type: license_type.into(),
            text: text.into(),
            file: None,
        }
    }

    /// Read a file and classify its contents.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LicenseError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LicenseError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        // Latin-1 copyright lines are common; they must not hide the license.
        let text = String::from_utf8(bytes)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned());

        let mut license = Self {
            license_type: String::new(),
            text,
            file: Some(path.to_path_buf()),
        };
        license.guess_type()?;
        Ok(license)
    }

    /// Locate the single license file in `dir` and classify it.
    ///
    /// Fails rather than choose when the directory holds several candidates.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, LicenseError> {
        let dir = dir.as_ref();
        let mut files = files::search_dir(dir)?;

        match files.len() {
            0 => Err(LicenseError::NoLicenseFile {
                dir: dir.to_path_buf(),
            }),
            1 => {
                let file = files.remove(0);
                debug!(file = %file.display(), "found license file");
                Self::from_file(file)
            }
            _ => Err(LicenseError::MultipleLicenseFiles {
                dir: dir.to_path_buf(),
                files,
            }),
        }
    }

    /// Set [`license_type`](Self::license_type) from the text.
    ///
    /// On failure the type is left as it was.
    pub fn guess_type(&mut self) -> Result<(), LicenseError> {
        let entry = classifier::classify(&self.text).ok_or(LicenseError::UnrecognizedType)?;
        self.license_type = entry.id.to_string();
        Ok(())
    }

    /// Whether the type is a catalog identifier. Ignores the text.
    pub fn is_recognized(&self) -> bool {
        catalog::lookup(&self.license_type).is_some()
    }
}
