// src/services/mod.rs

//! Service layer for the snoop application.
//!
//! This module contains the per-stage logic of the pipeline:
//! - Document fetching and staging (`Fetch`, `HttpFetcher`)
//! - Text extraction (`extractor`)
//! - Link scanning (`scanner`)
//! - Report rendering (`reporter`)

mod fetcher;

pub mod extractor;
pub mod reporter;
pub mod scanner;

pub use fetcher::{Fetch, HttpFetcher};
