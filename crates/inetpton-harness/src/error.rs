//! Harness error type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("fixture {}: {source}", path.display())]
    FixtureFile {
        path: PathBuf,
        #[source]
        source: Box<HarnessError>,
    },
    #[error("case '{case}': {message}")]
    BadInput { case: String, message: String },
    #[error("unsupported function '{0}'")]
    UnsupportedFunction(String),
    #[error("unsupported mode '{0}', expected strict|hardened")]
    UnsupportedMode(String),
}
