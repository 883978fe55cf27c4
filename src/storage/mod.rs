// src/storage/mod.rs
use crate::batch::models::BatchReport;
use crate::utils::error::StorageError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "section_compiler_manifest.json";

pub struct StorageManager {
    base_dir: PathBuf,
    extension: String,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P, extension: &str) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path, extension: extension.to_string() })
    }

    /// Path of the output file for a keyword: `<base_dir>/<keyword>.<ext>`
    pub fn section_path(&self, keyword: &str) -> PathBuf {
        self.base_dir.join(format!("{}.{}", keyword, self.extension))
    }

    /// Writes one keyword's compiled content as UTF-8, replacing any existing file
    pub fn save_section(&self, keyword: &str, content: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.section_path(keyword);

        let mut file = fs::File::create(&file_path)
            .map_err(StorageError::IoError)?;
        file.write_all(content.as_bytes())
            .map_err(StorageError::IoError)?;

        tracing::debug!("Saved section {} to {}", keyword, file_path.display());

        Ok(file_path)
    }

    /// Writes every keyword of the report. Returns the written paths.
    pub fn save_all(&self, report: &BatchReport) -> Result<Vec<PathBuf>, StorageError> {
        let mut written = Vec::with_capacity(report.sections.len());
        for (keyword, content) in report.sections.iter() {
            written.push(self.save_section(keyword, content)?);
        }
        tracing::info!("Saved {} section files to {}", written.len(), self.base_dir.display());
        Ok(written)
    }

    /// Saves a description of the run in JSON format
    pub fn save_manifest(&self, report: &BatchReport) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(MANIFEST_FILE);

        let sections: serde_json::Map<String, serde_json::Value> = report
            .sections
            .iter()
            .map(|(keyword, content)| {
                (
                    keyword.to_string(),
                    serde_json::json!({
                        "output_file": self.section_path(keyword).file_name().map(|n| n.to_string_lossy().into_owned()),
                        "content_length": content.len(),
                    }),
                )
            })
            .collect();

        let manifest = serde_json::json!({
            "keywords": report.sections.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            "files": report.files,
            "sections": sections,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let manifest_str = serde_json::to_string_pretty(&manifest)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, manifest_str)
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved manifest to {}", file_path.display());

        Ok(file_path)
    }
}
