use std::path::PathBuf;

/// Error type for storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The key cannot be used by this backend.
    #[error("invalid storage key `{key}`: {reason}")]
    InvalidKey { key: String, reason: &'static str },

    /// Reading a stored value failed.
    #[error("failed to read `{key}` from {}: {source}", .path.display())]
    ReadFailure {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or removing a stored value failed.
    #[error("failed to write `{key}` to {}: {source}", .path.display())]
    WriteFailure {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InvalidKey { .. } => "key",
            Self::ReadFailure { .. } | Self::WriteFailure { .. } => "io",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidKey { .. } => "STORAGE_INVALID_KEY",
            Self::ReadFailure { .. } => "STORAGE_READ",
            Self::WriteFailure { .. } => "STORAGE_WRITE",
        }
    }

    /// I/O failures may be transient; a bad key never is.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ReadFailure { .. } | Self::WriteFailure { .. })
    }
}
