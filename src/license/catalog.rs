use std::sync::LazyLock;

use crate::license::normalize::normalize;

pub const MIT: &str = "MIT";
pub const BSD_3_CLAUSE: &str = "BSD-3-Clause";
pub const BSD_2_CLAUSE: &str = "BSD-2-Clause";
pub const ISC: &str = "ISC";
pub const APACHE_2_0: &str = "Apache-2.0";
pub const MPL_2_0: &str = "MPL-2.0";
pub const GPL_2_0: &str = "GPL-2.0";
pub const GPL_3_0: &str = "GPL-3.0";
pub const LGPL_3_0: &str = "LGPL-3.0";
pub const AGPL_3_0: &str = "AGPL-3.0";
pub const UNLICENSE: &str = "Unlicense";

/// A known license type and how to recognize it.
#[derive(Debug)]
pub struct LicenseEntry {
    pub id: &'static str,
    /// Canonical reference text, compared after normalization.
    pub text: &'static str,
    /// Short-form references (canonical URLs, no scheme) that identify the
    /// license on their own. Matched case-sensitively against raw text.
    pub abbreviations: &'static [&'static str],
}

/// The catalog, in match order. No entry's normalized text may be contained
/// in another's.
pub static CATALOG: &[LicenseEntry] = &[
    LicenseEntry {
        id: MIT,
        text: include_str!("texts/MIT.txt"),
        abbreviations: &["opensource.org/licenses/MIT"],
    },
    LicenseEntry {
        id: BSD_3_CLAUSE,
        text: include_str!("texts/BSD-3-Clause.txt"),
        abbreviations: &["opensource.org/licenses/BSD-3-Clause"],
    },
    LicenseEntry {
        id: BSD_2_CLAUSE,
        text: include_str!("texts/BSD-2-Clause.txt"),
        abbreviations: &["opensource.org/licenses/BSD-2-Clause"],
    },
    LicenseEntry {
        id: ISC,
        text: include_str!("texts/ISC.txt"),
        abbreviations: &["opensource.org/licenses/ISC"],
    },
    LicenseEntry {
        id: APACHE_2_0,
        text: include_str!("texts/Apache-2.0.txt"),
        abbreviations: &["www.apache.org/licenses/LICENSE-2.0"],
    },
    LicenseEntry {
        id: MPL_2_0,
        text: include_str!("texts/MPL-2.0.txt"),
        abbreviations: &["mozilla.org/MPL/2.0/"],
    },
    LicenseEntry {
        id: GPL_2_0,
        text: include_str!("texts/GPL-2.0.txt"),
        abbreviations: &["www.gnu.org/licenses/old-licenses/gpl-2.0"],
    },
    LicenseEntry {
        id: GPL_3_0,
        text: include_str!("texts/GPL-3.0.txt"),
        abbreviations: &["www.gnu.org/licenses/gpl-3.0"],
    },
    LicenseEntry {
        id: LGPL_3_0,
        text: include_str!("texts/LGPL-3.0.txt"),
        abbreviations: &["www.gnu.org/licenses/lgpl-3.0"],
    },
    LicenseEntry {
        id: AGPL_3_0,
        text: include_str!("texts/AGPL-3.0.txt"),
        abbreviations: &["www.gnu.org/licenses/agpl-3.0"],
    },
    LicenseEntry {
        id: UNLICENSE,
        text: include_str!("texts/Unlicense.txt"),
        abbreviations: &["unlicense.org"],
    },
];

static NORMALIZED: LazyLock<Vec<String>> =
    LazyLock::new(|| CATALOG.iter().map(|e| normalize(e.text)).collect());

/// Identifiers of every catalog entry, in match order.
pub fn known_licenses() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|e| e.id)
}

/// Find the entry for an identifier. Exact, case-sensitive.
pub fn lookup(id: &str) -> Option<&'static LicenseEntry> {
    CATALOG.iter().find(|e| e.id == id)
}

/// First entry whose normalized reference text equals `normalized`.
pub(crate) fn match_exact(normalized: &str) -> Option<&'static LicenseEntry> {
    CATALOG
        .iter()
        .zip(NORMALIZED.iter())
        .find(|(_, reference)| reference.as_str() == normalized)
        .map(|(entry, _)| entry)
}

/// First entry with an abbreviation contained in `raw`.
pub(crate) fn match_abbreviated(raw: &str) -> Option<&'static LicenseEntry> {
    CATALOG
        .iter()
        .find(|e| e.abbreviations.iter().any(|a| raw.contains(a)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_unique() {
        let mut ids: Vec<&str> = known_licenses().collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_no_reference_text_contains_another() {
        for (i, a) in NORMALIZED.iter().enumerate() {
            for (j, b) in NORMALIZED.iter().enumerate() {
                if i != j {
                    assert!(
                        !b.contains(a.as_str()),
                        "{} is contained in {}",
                        CATALOG[i].id,
                        CATALOG[j].id
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_entry_has_text_and_abbreviation() {
        for entry in CATALOG {
            assert!(!entry.text.trim().is_empty(), "{} has no text", entry.id);
            assert!(!entry.abbreviations.is_empty(), "{} has no abbreviation", entry.id);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("Apache-2.0").map(|e| e.id), Some(APACHE_2_0));
        assert!(lookup("apache-2.0").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_match_exact_uses_normalized_form() {
        let shouted = CATALOG[0].text.to_uppercase().replace('\n', "\r\n");
        assert_eq!(match_exact(&normalize(&shouted)).map(|e| e.id), Some(MIT));
        assert!(match_exact("not a license").is_none());
    }

    #[test]
    fn test_gnu_urls_do_not_overlap() {
        assert_eq!(
            match_abbreviated("https://www.gnu.org/licenses/lgpl-3.0.html").map(|e| e.id),
            Some(LGPL_3_0)
        );
        assert_eq!(
            match_abbreviated("https://www.gnu.org/licenses/agpl-3.0.html").map(|e| e.id),
            Some(AGPL_3_0)
        );
        assert_eq!(
            match_abbreviated("https://www.gnu.org/licenses/gpl-3.0.html").map(|e| e.id),
            Some(GPL_3_0)
        );
    }

    #[test]
    fn test_abbreviation_is_case_sensitive() {
        assert!(match_abbreviated("HTTP://WWW.APACHE.ORG/LICENSES/LICENSE-2.0").is_none());
    }
}
