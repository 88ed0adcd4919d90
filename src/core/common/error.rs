use thiserror::Error;

/// Failure to obtain or decode the catalog document.
///
/// This is the only hard failure in the crate. Everything downstream of a
/// successful load (filtering, sorting, paging, lookups) falls back to
/// defaults instead of failing.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document could not be reached at all (network or I/O failure).
    #[error("catalog source '{location}' is unreachable: {reason}")]
    Unreachable { location: String, reason: String },

    /// The server answered with a non-success status.
    #[error("catalog source '{location}' returned HTTP status {status}")]
    Status { location: String, status: u16 },

    /// A required top-level section is absent or `null`.
    #[error("catalog document is missing the required '{0}' section")]
    MissingSection(&'static str),

    /// The payload is not JSON, or a section has the wrong shape.
    #[error("catalog document is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoadError {
    /// Whether re-running the load could plausibly succeed.
    ///
    /// Transport failures and bad statuses are usually transient; a malformed
    /// document stays malformed until someone republishes it.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Unreachable { .. } | Self::Status { .. })
    }
}

/// Invalid or unreadable browser configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config file '{path}': {reason}")]
    Parse { path: String, reason: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("IO error while reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum EventMatrixError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
