//! Extractor configuration

use abix_runtime::{AbixError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory of compiled artifacts, relative to the working directory
pub const DEFAULT_INPUT_DIR: &str = "build/contracts";

/// Directory the ABI files are written to, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "abis";

/// Where to read artifacts from, where to put ABIs, and how to do it
///
/// Every key is optional in a config file; missing keys fall back to
/// [`ExtractorConfig::default`].
///
/// # Examples
///
/// ```
/// use abix_exporter::ExtractorConfig;
///
/// let config = ExtractorConfig::new("out/artifacts", "out/abis").with_jobs(4);
/// assert_eq!(config.jobs, Some(4));
/// assert!(!config.create_output_dir);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractorConfig {
    /// Directory scanned for build artifacts
    pub input_dir: PathBuf,

    /// Directory receiving one ABI file per qualifying artifact
    pub output_dir: PathBuf,

    /// Create `output_dir` (and parents) before writing
    pub create_output_dir: bool,

    /// Worker threads; `None` uses rayon's default pool
    pub jobs: Option<usize>,

    /// Pretty-print ABI files instead of writing compact JSON
    pub pretty: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            create_output_dir: false,
            jobs: None,
            pretty: false,
        }
    }
}

impl ExtractorConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self { input_dir: input_dir.into(), output_dir: output_dir.into(), ..Self::default() }
    }

    /// Load a JSON config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| AbixError::file_read(path, e))?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| AbixError::config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;

        Ok(config)
    }

    pub fn with_create_output_dir(mut self, create: bool) -> Self {
        self.create_output_dir = create;
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.jobs == Some(0) {
            return Err(AbixError::config("jobs must be at least 1"));
        }
        if self.input_dir.as_os_str().is_empty() {
            return Err(AbixError::config("input_dir must not be empty"));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(AbixError::config("output_dir must not be empty"));
        }
        Ok(())
    }
}
