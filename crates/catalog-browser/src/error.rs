//! Error types for loading catalog fixtures.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading fixture data.
///
/// Joining and filtering never fail; only reading the source collections can.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// A fixture file could not be read.
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fixture file is not a JSON array of the expected records.
    #[error("Malformed fixture {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
