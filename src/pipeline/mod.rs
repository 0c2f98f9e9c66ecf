// src/pipeline/mod.rs

//! Pipeline entry point for batch snooping.

mod snoop;

pub use snoop::{BatchOutcome, run, run_with_output};
