use std::path::PathBuf;

use quire_core::ManifestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("{field} must contain at least one non-blank path segment")]
    EmptyRoot { field: &'static str },
    #[error("utc offset of {minutes} minutes is out of range")]
    OffsetOutOfRange { minutes: i32 },
    #[error("invalid context root")]
    ContextRoot(#[source] ManifestError),
}
