use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("malformed input {}: {source}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: InputFault,
    },

    #[error(
        "unrecognized input format: expected a list of ads or an object with \
         'ads', 'items', 'results', 'vehicles' or 'data'"
    )]
    UnrecognizedFormat,

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {context}: {source}")]
    Serialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] carvision_core::ConfigError),
}

/// Why an input document could not be loaded.
#[derive(Debug, Error)]
pub enum InputFault {
    #[error("cannot read file: {0}")]
    Read(#[source] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[source] serde_json::Error),
}

impl ImportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
