// src/services/extractor.rs

//! Text extraction service.
//!
//! Normalizes a staged document into a single text string according to the
//! classified extraction strategy.

use std::io::Read;

use regex::Regex;
use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::ExtractionStrategy;
use crate::storage::StagedResource;

/// Extract the normalized text of a staged resource.
pub fn extract(resource: &StagedResource, strategy: ExtractionStrategy) -> Result<String> {
    match strategy {
        ExtractionStrategy::PlainText => read_plain(resource),
        ExtractionStrategy::ConvertedDocument => convert_document(resource),
        ExtractionStrategy::MarkupScrape => Ok(scrape_markup(resource)),
    }
}

/// Read resource bytes verbatim as text.
fn read_plain(resource: &StagedResource) -> Result<String> {
    let bytes = std::fs::read(resource.path())
        .map_err(|e| AppError::read(resource.path().display().to_string(), e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Convert a binary document (PDF, PPTX) to text.
fn convert_document(resource: &StagedResource) -> Result<String> {
    let path = resource.path();
    let display = path.display().to_string();

    match path.extension().and_then(|e| e.to_str()) {
        Some("pdf") => pdf_extract::extract_text(path).map_err(|e| AppError::conversion(display, e)),
        Some("pptx") => pptx_text(resource),
        other => Err(AppError::conversion(
            display,
            format!("unsupported document format: {:?}", other),
        )),
    }
}

/// Pull the text runs out of every slide in a PPTX archive.
///
/// A PPTX file is a zip of XML parts; visible slide text lives in `<a:t>`
/// runs under `ppt/slides/slideN.xml`.
fn pptx_text(resource: &StagedResource) -> Result<String> {
    let display = resource.path().display().to_string();
    let file = std::fs::File::open(resource.path())
        .map_err(|e| AppError::conversion(display.clone(), e))?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| AppError::conversion(display.clone(), e))?;

    let mut slide_names: Vec<String> = archive
        .file_names()
        .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
        .map(|name| name.to_string())
        .collect();
    slide_names.sort();

    let run_pattern =
        Regex::new(r"<a:t[^>]*>([^<]*)</a:t>").expect("text run pattern is valid");

    let mut slides = Vec::new();
    for name in slide_names {
        let mut xml = String::new();
        archive
            .by_name(&name)
            .map_err(|e| AppError::conversion(display.clone(), e))?
            .read_to_string(&mut xml)
            .map_err(|e| AppError::conversion(display.clone(), e))?;

        let runs: Vec<String> = run_pattern
            .captures_iter(&xml)
            .map(|caps| unescape_xml(&caps[1]))
            .collect();
        slides.push(runs.join(" "));
    }

    Ok(slides.join("\n"))
}

/// Decode the predefined XML character entities.
fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Collect the text content of the document body.
///
/// Lenient by contract: an unreadable or bodyless document degrades to an
/// empty string so a single malformed page never aborts the batch. The
/// degradation is surfaced as a warning rather than an error.
fn scrape_markup(resource: &StagedResource) -> String {
    let bytes = match std::fs::read(resource.path()) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!(
                "Markup scrape degraded to empty text for {}: {}",
                resource.url(),
                e
            );
            return String::new();
        }
    };

    let document = Html::parse_document(&String::from_utf8_lossy(&bytes));
    let body = Selector::parse("body").expect("body selector is valid");

    match document.select(&body).next() {
        Some(element) => element.text().collect(),
        None => {
            log::warn!(
                "Markup scrape degraded to empty text for {}: no body element",
                resource.url()
            );
            String::new()
        }
    }
}
