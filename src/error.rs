use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AsdfError {
    /// Requested state text does not name a known state
    #[error("'{0}' is not a valid state")]
    InvalidState(String),

    /// Listing installed plugins failed.
    ///
    /// `assumed_installed` records the fail-closed answer the probe gave
    /// alongside the error; callers must not act on it.
    #[error("Failed to list asdf plugins: {source}")]
    ProbeFailed {
        assumed_installed: bool,
        #[source]
        source: Box<AsdfError>,
    },

    /// External command ran but exited unsuccessfully
    #[error("'{command}' failed with {status}. Output: {output}")]
    CommandFailed {
        command: String,
        status: String,
        output: String,
    },

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    #[error("{0}")]
    MalformedRequest(String),

    #[error("Could not read configuration file: {path}")]
    ArgsFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file not valid JSON: {path}")]
    ArgsFileInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("System dependency missing: {0}")]
    DependencyMissing(String),
}

impl AsdfError {
    /// Errors raised before reconciliation starts, caused by the request itself.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedRequest(_)
                | Self::ArgsFileUnreadable { .. }
                | Self::ArgsFileInvalid { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AsdfError>;
