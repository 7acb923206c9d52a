//! abix Runtime
//!
//! Shared types and error handling for the abix toolkit, which pulls the ABI
//! out of compiled contract build artifacts.

pub mod error;
pub mod types;

// Re-export core types for convenience
pub use error::{AbixError, Result};
pub use types::{AbiFile, ArtifactRecord, FileOutcome, FileStatus};
