//! Runner error types.

use crate::config::ConfigError;
use crate::publisher::PublishError;

/// Reasons a run aborts. Every variant maps to exit code 1.
///
/// A name collision at the API is not an error: it surfaces as
/// [`CreationOutcome::AlreadyExists`](crate::repository::CreationOutcome::AlreadyExists)
/// and the run continues.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// No credential source produced a token.
    #[error("No GitHub token found")]
    MissingCredential,

    /// The API refused to create the repository.
    #[error("Failed to create repository: {message}")]
    ApiRequestFailed { message: String },

    /// `git push` failed.
    #[error("Failed to push: {diagnostics}")]
    PublishPushFailed { diagnostics: String },

    /// A fatal git step could not be started.
    #[error("Failed to run '{command}': {source}")]
    UnexpectedCommand {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Progress output could not be written.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl From<PublishError> for RunnerError {
    fn from(error: PublishError) -> Self {
        match error {
            PublishError::PushFailed { diagnostics, .. } => Self::PublishPushFailed { diagnostics },
            PublishError::CommandFailed { command, source } => {
                Self::UnexpectedCommand { command, source }
            }
        }
    }
}
