//! Repository creation outcome.

use serde::Serialize;

/// Result of asking the hosting API to create a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CreationOutcome {
    /// The repository was created.
    Created {
        /// Browser URL reported by the API.
        url: String,
    },

    /// A repository with this name already exists. Treated as a soft success.
    AlreadyExists {
        /// Browser URL derived from owner and name.
        url: String,
    },

    /// Creation failed.
    Failed {
        /// API error message, or the raw response body.
        message: String,
    },
}

impl CreationOutcome {
    /// Returns the repository URL unless creation failed.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Created { url } | Self::AlreadyExists { url } => Some(url),
            Self::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::AlreadyExists { .. } => "already_exists",
            Self::Failed { .. } => "failed",
        }
    }
}
