// src/services/scanner.rs

//! Link scanning service.
//!
//! Applies each enabled category's pattern independently over the normalized
//! text and collects matches in order of appearance.

use std::collections::BTreeMap;

use crate::models::{ScanSelection, ServiceCategory};

/// Per-category scan results, keyed in report order.
pub type ScanResults = BTreeMap<ServiceCategory, Vec<String>>;

/// Scan normalized text for links of every enabled category.
///
/// Matches for a category appear in the same left-to-right order they occur
/// in the text; duplicates are kept. Categories outside the selection
/// produce no entry. Never fails.
pub fn scan(text: &str, selection: &ScanSelection) -> ScanResults {
    let mut results = ScanResults::new();

    for category in ServiceCategory::ALL {
        if !selection.contains(category) {
            continue;
        }

        let links: Vec<String> = category
            .matcher()
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        results.insert(category, links);
    }

    results
}
