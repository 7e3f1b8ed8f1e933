use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::error::LicenseError;

/// Base names a license file is commonly given.
pub const FILE_NAMES: &[&str] = &["LICENSE", "LICENCE", "COPYING", "COPYRIGHT"];

/// Extensions a license file may carry, including none.
pub const FILE_EXTENSIONS: &[&str] = &["", ".txt", ".md", ".rst"];

static LICENSE_FILES: LazyLock<Vec<String>> = LazyLock::new(|| {
    FILE_NAMES
        .iter()
        .flat_map(|name| FILE_EXTENSIONS.iter().map(move |ext| format!("{name}{ext}")))
        .collect()
});

/// Every file name that looks like a license file, base-name-major and
/// extension-minor (`LICENSE`, `LICENSE.txt`, …, `COPYRIGHT.rst`).
pub fn default_license_files() -> &'static [String] {
    &LICENSE_FILES
}

/// Whether `name` is a candidate license file name, ignoring case.
pub fn is_license_file(name: &str) -> bool {
    LICENSE_FILES.iter().any(|f| f.eq_ignore_ascii_case(name))
}

/// List the license-looking regular files directly inside `dir`.
///
/// Names are matched case-insensitively and subdirectories are skipped. The
/// result follows [`default_license_files`] order, not listing order. Entries
/// folding to the same candidate (`LICENSE` and `license` on a case-sensitive
/// file system) are all kept, sorted by name.
pub fn search_dir(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, LicenseError> {
    let dir = dir.as_ref();
    let unreadable = |source: std::io::Error| LicenseError::Unreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut found: HashMap<String, Vec<PathBuf>> = HashMap::new();
    for entry in std::fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let path = entry.path();

        // Follows symlinks, so a link to a regular file still counts.
        if !path.is_file() {
            trace!(path = %path.display(), "skipping non-file entry");
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if is_license_file(&name) {
            found.entry(name.to_ascii_lowercase()).or_default().push(path);
        }
    }

    let mut matches = Vec::new();
    for candidate in LICENSE_FILES.iter() {
        if let Some(mut paths) = found.remove(&candidate.to_ascii_lowercase()) {
            paths.sort();
            matches.extend(paths);
        }
    }

    debug!(dir = %dir.display(), count = matches.len(), "scanned for license files");
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_license_files() {
        let files = default_license_files();
        assert_eq!(files.len(), FILE_NAMES.len() * FILE_EXTENSIONS.len());
        assert_eq!(files[0], "LICENSE");
        assert_eq!(files[1], "LICENSE.txt");
        assert_eq!(files[4], "LICENCE");
        assert_eq!(files[files.len() - 1], "COPYRIGHT.rst");
    }

    #[test]
    fn test_is_license_file() {
        assert!(is_license_file("LICENSE"));
        assert!(is_license_file("license.md"));
        assert!(is_license_file("copying.RST"));
        assert!(!is_license_file("LICENSE.html"));
        assert!(!is_license_file("nope"));
        assert!(!is_license_file(""));
    }

    #[test]
    fn test_search_dir() {
        let dir = TempDir::new().unwrap();

        for name in default_license_files() {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        std::fs::write(dir.path().join("nope"), b"").unwrap();
        std::fs::create_dir(dir.path().join("dir")).unwrap();

        let result = search_dir(dir.path()).unwrap();
        let expected: Vec<PathBuf> = default_license_files()
            .iter()
            .map(|name| dir.path().join(name))
            .collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_search_dir_skips_directory_named_like_license() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("LICENSE")).unwrap();
        std::fs::write(dir.path().join("COPYING"), b"").unwrap();

        let result = search_dir(dir.path()).unwrap();
        assert_eq!(result, vec![dir.path().join("COPYING")]);
    }

    #[test]
    fn test_search_dir_orders_by_candidate_not_listing() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("copyright.md"), b"").unwrap();
        std::fs::write(dir.path().join("Licence.txt"), b"").unwrap();
        std::fs::write(dir.path().join("LICENSE"), b"").unwrap();

        let names: Vec<String> = search_dir(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["LICENSE", "Licence.txt", "copyright.md"]);
    }

    #[test]
    fn test_search_dir_keeps_case_folded_duplicates() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("license"), b"").unwrap();
        std::fs::write(dir.path().join("LICENSE"), b"").unwrap();
        std::fs::write(dir.path().join("COPYING"), b"").unwrap();

        // Case-insensitive file systems keep a single entry.
        if std::fs::read_dir(dir.path()).unwrap().count() < 3 {
            return;
        }

        let result = search_dir(dir.path()).unwrap();
        assert_eq!(
            result,
            vec![
                dir.path().join("LICENSE"),
                dir.path().join("license"),
                dir.path().join("COPYING"),
            ]
        );
    }

    #[test]
    fn test_search_dir_empty() {
        let dir = TempDir::new().unwrap();
        assert!(search_dir(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_search_dir_missing() {
        let err = search_dir("license-guess-nonexistent").unwrap_err();
        assert!(matches!(err, LicenseError::Unreadable { .. }));
    }

    #[test]
    fn test_search_dir_on_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("LICENSE");
        std::fs::write(&file, b"").unwrap();

        let err = search_dir(&file).unwrap_err();
        assert!(matches!(err, LicenseError::Unreadable { .. }));
    }
}
