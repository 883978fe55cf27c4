// src/batch/mod.rs
pub mod compiler;
pub mod models;
pub mod worker;

// Re-export key batch types for convenience
#[allow(unused_imports)]
pub use models::{BatchProgress, BatchReport, SectionMap};
pub use worker::spawn_batch;
