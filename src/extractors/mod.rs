// src/extractors/mod.rs
pub mod encoding;
pub mod section;

// Re-export key extraction types for convenience
pub use encoding::read_text_file;
pub use section::{FileSections, SectionExtractor, SECTION_SEPARATOR};
