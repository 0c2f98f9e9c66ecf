// src/storage/mod.rs

//! On-disk staging for fetched documents.

mod staging;

pub use staging::{StagedResource, StagingDir};
