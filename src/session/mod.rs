// src/session/mod.rs
use crate::utils::error::SessionError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "txt";

// Keywords must be able to form a `_NAME.` marker.
static KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+$").expect("Failed to compile KEYWORD_RE")
});

/// Everything one batch needs: which keywords to pull, from where, and which
/// files count as input. Owned by the front end and handed to the worker.
#[derive(Debug, Clone)]
pub struct Session {
    keywords: BTreeSet<String>,
    input_dir: PathBuf,
    extension: String,
}

impl Session {
    pub fn new<P: AsRef<Path>>(input_dir: P) -> Self {
        Self {
            keywords: BTreeSet::new(),
            input_dir: input_dir.as_ref().to_path_buf(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Sets the file extension (without the dot) used for input and output files.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Adds a keyword. Returns `Ok(false)` if it was already present.
    pub fn add_keyword(&mut self, raw: &str) -> Result<bool, SessionError> {
        let keyword = raw.trim();
        if keyword.is_empty() {
            return Err(SessionError::EmptyKeyword);
        }
        if !KEYWORD_RE.is_match(keyword) {
            return Err(SessionError::InvalidKeyword(keyword.to_string()));
        }

        let added = self.keywords.insert(keyword.to_string());
        if added {
            tracing::debug!("Added keyword _{}.", keyword);
        } else {
            tracing::info!("Keyword '{}' is already added", keyword);
        }
        Ok(added)
    }

    pub fn remove_keyword(&mut self, raw: &str) -> Result<(), SessionError> {
        let keyword = raw.trim();
        if self.keywords.remove(keyword) {
            tracing::debug!("Removed keyword _{}.", keyword);
            Ok(())
        } else {
            Err(SessionError::UnknownKeyword(keyword.to_string()))
        }
    }

    pub fn keywords(&self) -> &BTreeSet<String> {
        &self.keywords
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Checks that a batch can start.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.keywords.is_empty() {
            return Err(SessionError::NoKeywords);
        }
        if !self.input_dir.is_dir() {
            return Err(SessionError::InputDirMissing(self.input_dir.clone()));
        }
        Ok(())
    }
}
