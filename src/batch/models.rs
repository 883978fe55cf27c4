// src/batch/models.rs
use crate::extractors::{FileSections, SECTION_SEPARATOR};
use serde::Serialize;
use std::collections::BTreeMap;

/// Accumulated content per keyword across every file of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    sections: BTreeMap<String, String>,
}

impl SectionMap {
    /// Starts an empty entry for each requested keyword.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: keywords.into_iter().map(|k| (k.into(), String::new())).collect(),
        }
    }

    /// Appends one file's output, each keyword followed by a file separator.
    pub fn merge_file(&mut self, file: FileSections) {
        for (keyword, content) in file {
            let entry = self.sections.entry(keyword).or_default();
            entry.push_str(&content);
            entry.push_str(SECTION_SEPARATOR);
        }
    }

    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.sections.get(keyword).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// A scanned input file and the encoding it was read with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub file_name: String,
    pub encoding: String,
}

/// Emitted by the worker after each file is merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchProgress {
    pub processed: usize,
    pub total: usize,
    pub file_name: String,
}

impl BatchProgress {
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.processed * 100) / self.total) as u8
    }
}

/// Everything a finished scan produced; nothing is on disk yet.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub sections: SectionMap,
    pub files: Vec<FileRecord>,
}
