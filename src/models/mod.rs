// src/models/mod.rs

//! Domain models for the snoop application.

mod category;
mod strategy;

pub use category::{ScanSelection, ServiceCategory};
pub use strategy::ExtractionStrategy;
