// src/models/category.rs

//! Cloud-storage service categories and scan selection.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

/// One recognized cloud-storage provider whose links the scanner looks for.
///
/// The derived `Ord` fixes the report order: Drive, SharePoint, Dropbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ServiceCategory {
    Drive,
    SharePoint,
    Dropbox,
}

impl ServiceCategory {
    /// All defined categories, in report order.
    pub const ALL: [ServiceCategory; 3] = [Self::Drive, Self::SharePoint, Self::Dropbox];

    /// Human-readable section label for the report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Drive => "Google Drive links",
            Self::SharePoint => "SharePoint links",
            Self::Dropbox => "Dropbox links",
        }
    }

    /// Link-matching pattern for this category.
    ///
    /// Matches are terminated at the first whitespace, quote, or
    /// angle-bracket character. Scheme and host matching is case-sensitive.
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::Drive => r#"https?://drive\.google\.com/[^\s"'>]+"#,
            Self::SharePoint => {
                r#"https?://([a-z0-9\-]+\.|)(my\.|team\.|)[a-z0-9\-]+\.sharepoint\.com/[^\s"'>]+"#
            }
            // Looser than the others: dropbox.com may sit anywhere in the host.
            Self::Dropbox => r#"https?://[^\s"'>]+dropbox\.com/[^\s"'>]+"#,
        }
    }

    /// Compiled link matcher for this category.
    ///
    /// Compiled once per category for the lifetime of the process; the
    /// patterns are constants and every one is pinned by a test.
    pub fn matcher(&self) -> &'static Regex {
        static DRIVE: OnceLock<Regex> = OnceLock::new();
        static SHAREPOINT: OnceLock<Regex> = OnceLock::new();
        static DROPBOX: OnceLock<Regex> = OnceLock::new();

        let cell = match self {
            Self::Drive => &DRIVE,
            Self::SharePoint => &SHAREPOINT,
            Self::Dropbox => &DROPBOX,
        };
        cell.get_or_init(|| Regex::new(self.pattern()).expect("category pattern is valid"))
    }

    /// Parse a selection token into a category.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "drive" => Some(Self::Drive),
            "sharepoint" => Some(Self::SharePoint),
            "dropbox" => Some(Self::Dropbox),
            _ => None,
        }
    }
}

/// The set of categories enabled for one run.
///
/// Parsed once from the `--snoop` string at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSelection {
    categories: BTreeSet<ServiceCategory>,
}

impl ScanSelection {
    /// Parse a comma-separated selection string.
    ///
    /// The reserved token `all` enables every category regardless of other
    /// entries. Unknown tokens are ignored with a warning.
    pub fn parse(input: &str) -> Self {
        let mut categories = BTreeSet::new();

        for token in input.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            if token == "all" {
                return Self::all();
            }
            match ServiceCategory::from_token(token) {
                Some(category) => {
                    categories.insert(category);
                }
                None => log::warn!("Ignoring unknown snoop category: {}", token),
            }
        }

        Self { categories }
    }

    /// A selection containing every defined category.
    pub fn all() -> Self {
        Self {
            categories: ServiceCategory::ALL.into_iter().collect(),
        }
    }

    /// Whether a category is enabled.
    pub fn contains(&self, category: ServiceCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Whether no category is enabled.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for ScanSelection {
    /// Drive alone, matching the CLI default.
    fn default() -> Self {
        Self {
            categories: BTreeSet::from([ServiceCategory::Drive]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_category() {
        let selection = ScanSelection::parse("drive");
        assert!(selection.contains(ServiceCategory::Drive));
        assert!(!selection.contains(ServiceCategory::SharePoint));
        assert!(!selection.contains(ServiceCategory::Dropbox));
    }

    #[test]
    fn test_parse_multiple_with_whitespace() {
        let selection = ScanSelection::parse("sharepoint, dropbox");
        assert!(!selection.contains(ServiceCategory::Drive));
        assert!(selection.contains(ServiceCategory::SharePoint));
        assert!(selection.contains(ServiceCategory::Dropbox));
    }

    #[test]
    fn test_parse_all_overrides_other_entries() {
        let selection = ScanSelection::parse("drive,all");
        assert_eq!(selection, ScanSelection::all());
    }

    #[test]
    fn test_parse_unknown_tokens_ignored() {
        let selection = ScanSelection::parse("drive,onedrive");
        assert!(selection.contains(ServiceCategory::Drive));
        assert!(!selection.contains(ServiceCategory::SharePoint));
    }

    #[test]
    fn test_parse_empty_selection() {
        let selection = ScanSelection::parse("");
        assert!(selection.is_empty());
    }

    #[test]
    fn test_default_is_drive_only() {
        let selection = ScanSelection::default();
        assert!(selection.contains(ServiceCategory::Drive));
        assert!(!selection.contains(ServiceCategory::Dropbox));
    }

    #[test]
    fn test_every_pattern_compiles() {
        for category in ServiceCategory::ALL {
            assert!(regex::Regex::new(category.pattern()).is_ok());
        }
    }

    #[test]
    fn test_matcher_is_compiled_once_per_category() {
        for category in ServiceCategory::ALL {
            assert!(std::ptr::eq(category.matcher(), category.matcher()));
        }
    }
}
