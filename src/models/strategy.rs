// src/models/strategy.rs

//! Extraction strategy selection.

/// How the text of a fetched document is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// Read the resource bytes verbatim as text
    PlainText,
    /// Convert a binary document format (PDF, PPTX) to text
    ConvertedDocument,
    /// Parse as HTML and collect the body's text content
    MarkupScrape,
}

impl ExtractionStrategy {
    /// Choose a strategy from the URL suffix.
    ///
    /// Total over all strings: anything that is not `.txt`, `.pdf`, or
    /// `.pptx` falls back to HTML scraping. Suffix matching is
    /// case-sensitive.
    pub fn classify(url: &str) -> Self {
        if url.ends_with(".txt") {
            Self::PlainText
        } else if url.ends_with(".pdf") || url.ends_with(".pptx") {
            Self::ConvertedDocument
        } else {
            Self::MarkupScrape
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_plain_text() {
        assert_eq!(
            ExtractionStrategy::classify("https://example.com/notes.txt"),
            ExtractionStrategy::PlainText
        );
    }

    #[test]
    fn test_classify_converted_document() {
        assert_eq!(
            ExtractionStrategy::classify("https://example.com/report.pdf"),
            ExtractionStrategy::ConvertedDocument
        );
        assert_eq!(
            ExtractionStrategy::classify("https://example.com/deck.pptx"),
            ExtractionStrategy::ConvertedDocument
        );
    }

    #[test]
    fn test_classify_markup_fallback() {
        assert_eq!(
            ExtractionStrategy::classify("https://example.com/page.html"),
            ExtractionStrategy::MarkupScrape
        );
        assert_eq!(
            ExtractionStrategy::classify("https://example.com/"),
            ExtractionStrategy::MarkupScrape
        );
        assert_eq!(
            ExtractionStrategy::classify(""),
            ExtractionStrategy::MarkupScrape
        );
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        // Uppercase suffixes are not recognized and fall back to scraping.
        assert_eq!(
            ExtractionStrategy::classify("https://example.com/REPORT.PDF"),
            ExtractionStrategy::MarkupScrape
        );
    }

    #[test]
    fn test_classify_query_string_defeats_suffix() {
        assert_eq!(
            ExtractionStrategy::classify("https://example.com/report.pdf?dl=1"),
            ExtractionStrategy::MarkupScrape
        );
    }
}
