//! Artifact parsing
//!
//! Artifacts are parsed into a generic JSON value first, so that the shape
//! checks below see exactly what the file contains.

use abix_runtime::{AbixError, ArtifactRecord, Result};
use serde_json::Value;

/// Parse the raw content of a build artifact named `file`
///
/// A missing or `null` `abi` is not an error; it yields a record without an
/// ABI. Invalid JSON, a non-object document or a non-array `abi` are
/// [`AbixError::Parse`] errors.
pub fn parse_artifact(file: &str, content: &[u8]) -> Result<ArtifactRecord> {
    let document: Value =
        serde_json::from_slice(content).map_err(|e| AbixError::parse(file, e.to_string()))?;

    let mut fields = match document {
        Value::Object(fields) => fields,
        other => {
            return Err(AbixError::parse(
                file,
                format!("expected a JSON object, found {}", json_kind(&other)),
            ))
        }
    };

    match fields.remove("abi") {
        None | Some(Value::Null) => Ok(ArtifactRecord::new(None)),
        Some(Value::Array(abi)) => Ok(ArtifactRecord::new(Some(abi))),
        Some(other) => Err(AbixError::parse(
            file,
            format!("`abi` must be an array, found {}", json_kind(&other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
