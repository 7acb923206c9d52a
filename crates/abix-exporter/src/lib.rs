//! abix Exporter
//!
//! Scans a directory of compiled contract build artifacts (Truffle-style JSON
//! files with an `abi` field) and writes each non-empty `abi` array to its own
//! file, named after the artifact, in an output directory.
//!
//! ```no_run
//! use abix_exporter::{run, ExtractorConfig};
//!
//! let report = run(&ExtractorConfig::new("build/contracts", "abis"))?;
//! println!("{}", report.summary());
//! # Ok::<(), abix_exporter::AbixError>(())
//! ```

pub mod artifact;
pub mod config;
pub mod extractor;
pub mod report;

pub use artifact::parse_artifact;
pub use config::{ExtractorConfig, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
pub use extractor::{list_entries, process_file, run};
pub use report::RunReport;

// Re-export runtime types for convenience
pub use abix_runtime::{AbiFile, AbixError, ArtifactRecord, FileOutcome, FileStatus, Result};
