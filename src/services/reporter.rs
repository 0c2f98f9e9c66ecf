// src/services/reporter.rs

//! Report rendering service.
//!
//! Renders scan results as labeled sections, one link per line. Empty
//! categories emit nothing.

use std::fmt::Write;

use crate::services::scanner::ScanResults;

/// Render scan results as human-readable report lines.
///
/// Categories are visited in their fixed report order (Drive, SharePoint,
/// Dropbox); links keep their original text order.
pub fn render(results: &ScanResults) -> String {
    let mut out = String::new();

    for (category, links) in results {
        if links.is_empty() {
            continue;
        }

        let _ = writeln!(out, "Found {}:", category.label());
        for link in links {
            let _ = writeln!(out, "{}", link);
        }
    }

    out
}

/// Write scan results to an output sink.
pub fn write_to(out: &mut dyn std::io::Write, results: &ScanResults) {
    let rendered = render(results);
    if !rendered.is_empty() {
        let _ = out.write_all(rendered.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceCategory;

    #[test]
    fn test_render_empty_results() {
        assert_eq!(render(&ScanResults::new()), "");
    }

    #[test]
    fn test_write_to_emits_nothing_for_empty_results() {
        let mut out = Vec::new();
        write_to(&mut out, &ScanResults::new());
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_skips_empty_categories() {
        let mut results = ScanResults::new();
        results.insert(ServiceCategory::Drive, vec![]);
        results.insert(
            ServiceCategory::Dropbox,
            vec!["https://www.dropbox.com/s/abc".to_string()],
        );

        assert_eq!(
            render(&results),
            "Found Dropbox links:\nhttps://www.dropbox.com/s/abc\n"
        );
    }

    #[test]
    fn test_render_fixed_section_order() {
        let mut results = ScanResults::new();
        results.insert(
            ServiceCategory::Dropbox,
            vec!["https://www.dropbox.com/s/1".to_string()],
        );
        results.insert(
            ServiceCategory::Drive,
            vec![
                "https://drive.google.com/a".to_string(),
                "https://drive.google.com/b".to_string(),
            ],
        );

        assert_eq!(
            render(&results),
            "Found Google Drive links:\n\
             https://drive.google.com/a\n\
             https://drive.google.com/b\n\
             Found Dropbox links:\n\
             https://www.dropbox.com/s/1\n"
        );
    }
}
