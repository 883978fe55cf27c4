// src/extractors/section.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

// --- Constants ---
/// Appended after every extracted span, and after every file's contribution.
pub const SECTION_SEPARATOR: &str = "\n\n";

// --- Regex Patterns (Lazy Static) ---
// A marker is `_NAME.`; the word run is greedy, so `_A_B.` is the single marker `A_B`.
static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"_\w+\.").expect("Failed to compile MARKER_RE")
});

// --- Data Structures ---
/// One piece of a partitioned file: literal text, or a marker (name only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Span(&'a str),
    Marker(&'a str),
}

/// Per-file result: requested keyword -> concatenated spans.
pub type FileSections = BTreeMap<String, String>;

/// Splits `text` into alternating spans and markers.
///
/// The sequence always starts and ends with a span and has exactly one span
/// between consecutive markers, so adjacent markers yield an empty span.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for mat in MARKER_RE.find_iter(text) {
        tokens.push(Token::Span(&text[last..mat.start()]));
        // Strip the leading '_' and trailing '.', both single-byte.
        let marker = mat.as_str();
        tokens.push(Token::Marker(&marker[1..marker.len() - 1]));
        last = mat.end();
    }
    tokens.push(Token::Span(&text[last..]));

    tokens
}

/// Returns every distinct keyword that appears as a marker in `text`.
pub fn discover_keywords(text: &str) -> BTreeSet<String> {
    tokenize(text)
        .into_iter()
        .filter_map(|token| match token {
            Token::Marker(name) => Some(name.to_string()),
            Token::Span(_) => None,
        })
        .collect()
}

// --- Main Extractor Structure ---
pub struct SectionExtractor {
    requested: BTreeSet<String>,
}

impl SectionExtractor {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { requested: keywords.into_iter().map(Into::into).collect() }
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.requested.iter().map(String::as_str)
    }

    /// Extracts the requested sections from one file's text.
    ///
    /// Every requested keyword is present in the result; keywords that never
    /// appear map to an empty string. A span belongs to the most recent marker
    /// before it; text before the first marker, or after an unrequested marker,
    /// is dropped.
    pub fn extract(&self, text: &str) -> FileSections {
        let mut sections: FileSections = self
            .requested
            .iter()
            .map(|keyword| (keyword.clone(), String::new()))
            .collect();

        let mut current: Option<&str> = None;
        let mut kept = 0usize;
        for token in tokenize(text) {
            match token {
                Token::Marker(name) => current = Some(name),
                Token::Span(span) => {
                    let Some(name) = current else { continue };
                    if let Some(content) = sections.get_mut(name) {
                        content.push_str(span.trim());
                        content.push_str(SECTION_SEPARATOR);
                        kept += 1;
                    } else {
                        tracing::trace!("Dropping span under unrequested marker '{}'", name);
                    }
                }
            }
        }

        tracing::debug!("Kept {} spans for {} requested keywords", kept, self.requested.len());
        sections
    }
}
