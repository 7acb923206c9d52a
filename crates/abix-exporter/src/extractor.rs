//! Directory-level ABI extraction
//!
//! Each directory entry is read, parsed, filtered and written independently
//! on the rayon pool. [`run`] returns only once every entry has settled.

use crate::artifact::parse_artifact;
use crate::config::ExtractorConfig;
use crate::report::RunReport;
use abix_runtime::{AbixError, FileOutcome, Result};
use rayon::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Extract the ABI of every artifact in `config.input_dir`
///
/// Run-level failures are returned as errors: an invalid configuration, an
/// output directory that cannot be created, a worker pool that cannot be
/// started, or an input directory that cannot be listed. Per-file failures
/// are logged and recorded in the [`RunReport`] instead.
pub fn run(config: &ExtractorConfig) -> Result<RunReport> {
    config.validate()?;

    if config.create_output_dir {
        fs::create_dir_all(&config.output_dir)
            .map_err(|e| AbixError::file_write(&config.output_dir, e))?;
    }

    let entries = list_entries(&config.input_dir)
        .inspect_err(|e| error!(error = %e, "unable to scan artifact directory"))?;
    debug!(count = entries.len(), input = %config.input_dir.display(), "artifacts found");

    let outcomes = match config.jobs {
        Some(jobs) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .map_err(|e| AbixError::other(format!("Failed to start worker pool: {}", e)))?;
            pool.install(|| process_all(&entries, config))
        }
        None => process_all(&entries, config),
    };

    Ok(RunReport::new(outcomes))
}

/// Every entry of `dir`, files or not, in no particular order
pub fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = fs::read_dir(dir).map_err(|e| AbixError::directory_list(dir, e))?;

    read_dir
        .map(|entry| entry.map(|e| e.path()).map_err(|e| AbixError::directory_list(dir, e)))
        .collect()
}

fn process_all(entries: &[PathBuf], config: &ExtractorConfig) -> Vec<FileOutcome> {
    entries
        .par_iter()
        .map(|source| process_file(source, &config.output_dir, config.pretty))
        .collect()
}

/// Read one artifact and write its ABI into `output_dir` under the same name
pub fn process_file(source: &Path, output_dir: &Path, pretty: bool) -> FileOutcome {
    let Some(file_name) = source.file_name() else {
        let name = source.display().to_string();
        let error = AbixError::other(format!("Not a file path: {}", name));
        warn!(file = %name, error = %error, "artifact not extracted");
        return FileOutcome::failed(name, error);
    };
    let name = file_name.to_string_lossy().into_owned();
    debug!(file = %name, "processing artifact");

    match extract_abi(source, file_name, &name, output_dir, pretty) {
        Ok(Some(entries)) => {
            info!(file = %name, entries, "ABI written");
            FileOutcome::written(name, entries)
        }
        Ok(None) => {
            debug!(file = %name, "no ABI, skipped");
            FileOutcome::skipped(name)
        }
        Err(e) => {
            warn!(file = %name, error = %e, "artifact not extracted");
            FileOutcome::failed(name, e)
        }
    }
}

fn extract_abi(
    source: &Path,
    file_name: &OsStr,
    name: &str,
    output_dir: &Path,
    pretty: bool,
) -> Result<Option<usize>> {
    let content = fs::read(source).map_err(|e| AbixError::file_read(source, e))?;
    let record = parse_artifact(name, &content)?;

    let Some(abi_file) = record.into_abi_file(name) else {
        return Ok(None);
    };

    let json = if pretty { abi_file.to_json_pretty()? } else { abi_file.to_json()? };
    let target = output_dir.join(file_name);
    fs::write(&target, json).map_err(|e| AbixError::file_write(&target, e))?;

    Ok(Some(abi_file.entries()))
}
