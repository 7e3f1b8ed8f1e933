use tracing::debug;

use crate::license::catalog::{match_abbreviated, match_exact, LicenseEntry};
use crate::license::normalize::normalize;

/// Classify raw license text against the catalog.
///
/// Tries, in order:
/// - exact equality of the normalized text with each entry's reference text
/// - each entry's abbreviations as case-sensitive substrings of the raw text
///
/// Entries are tried in catalog order; the first hit wins.
pub(crate) fn classify(text: &str) -> Option<&'static LicenseEntry> {
    if let Some(entry) = match_exact(&normalize(text)) {
        debug!(license = entry.id, "exact match");
        return Some(entry);
    }

    let entry = match_abbreviated(text)?;
    debug!(license = entry.id, "abbreviated match");
    Some(entry)
}
