//! Error types for the abix toolkit

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for abix operations
pub type Result<T> = std::result::Result<T, AbixError>;

/// Main error type for abix operations
#[derive(Debug, Error)]
pub enum AbixError {
    /// The artifact directory could not be enumerated
    #[error("Unable to scan directory {}: {source}", path.display())]
    DirectoryList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single directory entry could not be read as a file
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact content is not JSON, or not shaped like a build artifact
    #[error("Parse error in {file}: {reason}")]
    Parse { file: String, reason: String },

    /// An ABI file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid extractor configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// An ABI could not be serialized back to JSON
    #[error("Serialization error in {file}: {reason}")]
    Serialization { file: String, reason: String },

    /// Other errors not covered by specific variants
    #[error("{0}")]
    Other(String),
}

impl AbixError {
    pub fn directory_list(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryList { path: path.into(), source }
    }

    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead { path: path.into(), source }
    }

    pub fn parse(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse { file: file.into(), reason: reason.into() }
    }

    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite { path: path.into(), source }
    }

    pub fn serialization(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Serialization { file: file.into(), reason: reason.into() }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Short machine-readable name of the failure class
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DirectoryList { .. } => "directory_list",
            Self::FileRead { .. } => "file_read",
            Self::Parse { .. } => "parse",
            Self::FileWrite { .. } => "file_write",
            Self::Config(_) => "config",
            Self::Serialization { .. } => "serialization",
            Self::Other(_) => "other",
        }
    }
}
