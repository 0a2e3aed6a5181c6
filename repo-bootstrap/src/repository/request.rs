//! Wire types for the repository creation endpoint.

use crate::config::RepoSpec;
use serde::{Deserialize, Serialize};

/// JSON body of `POST /user/repos`.
#[derive(Debug, Serialize)]
pub struct CreateRepoRequest<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub private: bool,
    pub auto_init: bool,
    pub has_issues: bool,
    pub has_projects: bool,
    pub has_wiki: bool,
}

impl<'a> From<&'a RepoSpec> for CreateRepoRequest<'a> {
    fn from(spec: &'a RepoSpec) -> Self {
        Self {
            name: spec.name(),
            description: spec.description(),
            private: spec.private(),
            auto_init: spec.auto_init(),
            has_issues: spec.has_issues(),
            has_projects: spec.has_projects(),
            has_wiki: spec.has_wiki(),
        }
    }
}

/// The part of a successful response we use.
#[derive(Debug, Deserialize)]
pub struct CreatedRepository {
    pub html_url: Option<String>,
}

/// Error body returned by the API.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<serde_json::Value>>,
}
