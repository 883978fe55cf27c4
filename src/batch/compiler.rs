// src/batch/compiler.rs
use crate::batch::models::{BatchProgress, BatchReport, FileRecord, SectionMap};
use crate::extractors::section::discover_keywords;
use crate::extractors::{read_text_file, SectionExtractor};
use crate::session::Session;
use crate::utils::error::ExtractError;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists regular files directly inside `dir` whose extension is `extension`,
/// sorted by file name.
pub fn list_input_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ExtractError> {
    let io_err = |source| ExtractError::Io { path: dir.to_path_buf(), source };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let matches_ext = path.extension().and_then(|e| e.to_str()) == Some(extension);
        if matches_ext && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    tracing::debug!("Found {} .{} files in {}", files.len(), extension, dir.display());
    Ok(files)
}

/// Scans every input file of the session and merges the requested sections.
///
/// Files are processed one after another. The first failing file aborts the
/// whole scan. `on_progress` is called after each file is merged.
pub fn compile_sections<F>(session: &Session, mut on_progress: F) -> Result<BatchReport, ExtractError>
where
    F: FnMut(BatchProgress),
{
    let files = list_input_files(session.input_dir(), session.extension())?;
    let total = files.len();
    tracing::info!("Scanning {} files in {}", total, session.input_dir().display());

    let extractor = SectionExtractor::new(session.keywords().iter().cloned());
    let mut report = BatchReport {
        sections: SectionMap::new(extractor.keywords()),
        files: Vec::with_capacity(total),
    };

    for (index, path) in files.iter().enumerate() {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (text, detected) = read_text_file(path).map_err(|e| {
            tracing::error!("Failed to read {}: {}", path.display(), e);
            e
        })?;

        if tracing::enabled!(tracing::Level::TRACE) {
            tracing::trace!("{} markers: {:?}", file_name, discover_keywords(&text));
        }

        report.sections.merge_file(extractor.extract(&text));
        report.files.push(FileRecord {
            file_name: file_name.clone(),
            encoding: detected.name().to_string(),
        });

        on_progress(BatchProgress { processed: index + 1, total, file_name });
    }

    tracing::info!("Scan complete: {} files, {} keywords", total, report.sections.len());
    Ok(report)
}
