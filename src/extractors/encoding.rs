// src/extractors/encoding.rs

// --- Imports ---
use crate::utils::error::ExtractError;
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use std::fs;
use std::path::Path;

/// Encoding used when the bytes carry no evidence of anything else.
pub const DEFAULT_ENCODING: &Encoding = UTF_8;

/// How an encoding guess was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionSource {
    /// A byte-order mark at the start of the file.
    Bom,
    /// Empty, pure ASCII, or valid UTF-8.
    Utf8,
    /// Statistical guess over the byte content.
    Statistical,
}

#[derive(Debug, Clone, Copy)]
pub struct DetectedEncoding {
    pub encoding: &'static Encoding,
    /// Length of the BOM to skip before decoding (0 if none).
    pub bom_len: usize,
    pub source: DetectionSource,
}

impl DetectedEncoding {
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }
}

/// Returns a best-guess encoding for `bytes`. Never fails; inconclusive input
/// falls back to [`DEFAULT_ENCODING`].
pub fn detect_encoding(bytes: &[u8]) -> DetectedEncoding {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        tracing::trace!("BOM found, using {}", encoding.name());
        return DetectedEncoding { encoding, bom_len, source: DetectionSource::Bom };
    }

    if std::str::from_utf8(bytes).is_ok() {
        return DetectedEncoding { encoding: DEFAULT_ENCODING, bom_len: 0, source: DetectionSource::Utf8 };
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    tracing::debug!("Statistical detection guessed {}", encoding.name());

    DetectedEncoding { encoding, bom_len: 0, source: DetectionSource::Statistical }
}

/// Decodes `bytes` with a previously detected encoding. Malformed sequences are
/// an error rather than being replaced.
pub fn decode(bytes: &[u8], detected: &DetectedEncoding, path: &Path) -> Result<String, ExtractError> {
    let body = &bytes[detected.bom_len..];
    detected
        .encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|text| text.into_owned())
        .ok_or_else(|| ExtractError::Decode {
            path: path.to_path_buf(),
            encoding: detected.name(),
        })
}

/// Reads a whole file, detects its encoding and decodes it.
pub fn read_text_file(path: &Path) -> Result<(String, DetectedEncoding), ExtractError> {
    let bytes = fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let detected = detect_encoding(&bytes);
    tracing::debug!("{}: {} bytes, encoding {} ({:?})", path.display(), bytes.len(), detected.name(), detected.source);

    let text = decode(&bytes, &detected, path)?;
    Ok((text, detected))
}
