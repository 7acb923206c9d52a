//! Core types for the abix toolkit
//!
//! A build artifact is read once, reduced to its ABI, and either written out
//! as an [`AbiFile`] or skipped. Every directory entry ends up as exactly one
//! [`FileOutcome`].

use crate::error::{AbixError, Result};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// The parsed part of a compiled contract artifact that abix cares about
///
/// All other artifact fields (`bytecode`, `ast`, `networks`, ...) are ignored.
///
/// # Examples
///
/// ```
/// use abix_runtime::ArtifactRecord;
/// use serde_json::json;
///
/// let record = ArtifactRecord::new(Some(vec![json!({"type": "fallback"})]));
/// let abi_file = record.into_abi_file("Token.json").unwrap();
/// assert_eq!(abi_file.entries(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArtifactRecord {
    /// `None` when the artifact has no `abi` key or it is `null`
    abi: Option<Vec<Value>>,
}

impl ArtifactRecord {
    pub fn new(abi: Option<Vec<Value>>) -> Self {
        Self { abi }
    }

    pub fn abi(&self) -> Option<&[Value]> {
        self.abi.as_deref()
    }

    pub fn has_abi(&self) -> bool {
        self.abi.as_ref().is_some_and(|abi| !abi.is_empty())
    }

    /// Turn the record into an output file, if its ABI is non-empty
    pub fn into_abi_file(self, name: impl Into<String>) -> Option<AbiFile> {
        match self.abi {
            Some(abi) if !abi.is_empty() => Some(AbiFile::new(name, abi)),
            _ => None,
        }
    }
}

/// A standalone ABI file: the bare `abi` array of one artifact
#[derive(Debug, Clone, PartialEq)]
pub struct AbiFile {
    name: String,
    abi: Vec<Value>,
}

impl AbiFile {
    pub fn new(name: impl Into<String>, abi: Vec<Value>) -> Self {
        Self { name: name.into(), abi }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abi(&self) -> &[Value] {
        &self.abi
    }

    pub fn entries(&self) -> usize {
        self.abi.len()
    }

    /// Compact JSON, keys in their original order
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.abi)
            .map_err(|e| AbixError::serialization(&self.name, e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.abi)
            .map_err(|e| AbixError::serialization(&self.name, e.to_string()))
    }
}

/// What happened to one directory entry during a run
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// ABI written with this many entries
    Written { entries: usize },
    /// No ABI, or an empty one
    Skipped,
    /// Read, parse or write failure, local to this file
    Failed {
        #[serde(serialize_with = "serialize_error")]
        error: AbixError,
    },
}

/// Per-entry result of a run
#[derive(Debug, Serialize)]
pub struct FileOutcome {
    pub name: String,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn written(name: impl Into<String>, entries: usize) -> Self {
        Self { name: name.into(), status: FileStatus::Written { entries } }
    }

    pub fn skipped(name: impl Into<String>) -> Self {
        Self { name: name.into(), status: FileStatus::Skipped }
    }

    pub fn failed(name: impl Into<String>, error: AbixError) -> Self {
        Self { name: name.into(), status: FileStatus::Failed { error } }
    }

    pub fn is_written(&self) -> bool {
        matches!(self.status, FileStatus::Written { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.status, FileStatus::Skipped)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, FileStatus::Failed { .. })
    }

    pub fn error(&self) -> Option<&AbixError> {
        match &self.status {
            FileStatus::Failed { error } => Some(error),
            _ => None,
        }
    }
}

fn serialize_error<S: Serializer>(
    error: &AbixError,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&error.to_string())
}
