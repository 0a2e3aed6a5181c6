//! Publish error types.

use thiserror::Error;

/// Errors that abort publishing.
#[derive(Debug, Error)]
pub enum PublishError {
    /// A fatal step (the push) exited unsuccessfully.
    #[error("'{command}' failed: {diagnostics}")]
    PushFailed {
        command: String,
        diagnostics: String,
    },

    /// A fatal step could not be run at all.
    #[error("Failed to run '{command}': {source}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl PublishError {
    /// Text to show the user: git's own output, or the launch error.
    #[must_use]
    pub fn diagnostics(&self) -> String {
        match self {
            Self::PushFailed { diagnostics, .. } => diagnostics.clone(),
            Self::CommandFailed { source, .. } => source.to_string(),
        }
    }
}
