// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not decode {} as {encoding}: malformed byte sequence", .path.display())]
    Decode { path: PathBuf, encoding: &'static str },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Keyword is empty")]
    EmptyKeyword,

    #[error("Invalid keyword '{0}': only letters, digits and underscores are allowed")]
    InvalidKeyword(String),

    #[error("Keyword not in session: {0}")]
    UnknownKeyword(String),

    #[error("Please enter at least one keyword")]
    NoKeywords,

    #[error("Input folder does not exist or is not a directory: {}", .0.display())]
    InputDirMissing(PathBuf),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Batch worker failed: {0}")]
    Worker(String),
}
