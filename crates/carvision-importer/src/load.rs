//! Input Loader: reads the export file into a JSON value.

use std::path::Path;

use crate::error::{ImportError, InputFault};

/// Reads `path` as UTF-8 and parses it as a JSON document.
///
/// # Errors
///
/// Returns [`ImportError::MalformedInput`] if the file cannot be read or its
/// contents are not valid JSON.
pub fn load_document(path: &Path) -> Result<serde_json::Value, ImportError> {
    let text = std::fs::read_to_string(path).map_err(|e| ImportError::MalformedInput {
        path: path.to_path_buf(),
        source: InputFault::Read(e),
    })?;

    let document = parse_document(&text).map_err(|e| ImportError::MalformedInput {
        path: path.to_path_buf(),
        source: InputFault::Json(e),
    })?;

    tracing::info!(path = %path.display(), bytes = text.len(), "loaded input document");
    Ok(document)
}

pub(crate) fn parse_document(text: &str) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::from_str(text)
}
