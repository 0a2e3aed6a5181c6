//! Config file deserialization.

use crate::config::ConfigError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Settings parsed from a `repo-bootstrap.toml` file.
///
/// Every field is optional so the same type can carry command-line overrides,
/// which are layered on top with [`ConfigFile::merge`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    /// Account that will own the repository.
    pub owner: Option<String>,

    /// Repository name.
    pub name: Option<String>,

    /// Repository description.
    pub description: Option<String>,

    /// Whether the repository is private.
    pub private: Option<bool>,

    /// Whether issues are enabled.
    pub has_issues: Option<bool>,

    /// Whether projects are enabled.
    pub has_projects: Option<bool>,

    /// Whether the wiki is enabled.
    pub has_wiki: Option<bool>,

    /// Whether the hosting service creates an initial commit.
    pub auto_init: Option<bool>,

    /// Branch the local history is pushed to.
    pub branch: Option<String>,

    /// Base URL of the web interface (e.g. `https://github.com`).
    pub web_url: Option<String>,

    /// Base URL of the REST API (e.g. `https://api.github.com`).
    pub api_url: Option<String>,

    /// Host used in the SSH remote URL (e.g. `github.com`).
    pub ssh_host: Option<String>,

    /// Extra hints printed after a successful run. Handlebars templates.
    #[serde(default)]
    pub next_steps: Vec<String>,
}

impl ConfigFile {
    /// Loads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading config file");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Layers `overrides` on top of `self`. Values present in `overrides` win.
    #[must_use]
    pub fn merge(self, overrides: ConfigFile) -> Self {
        Self {
            owner: overrides.owner.or(self.owner),
            name: overrides.name.or(self.name),
            description: overrides.description.or(self.description),
            private: overrides.private.or(self.private),
            has_issues: overrides.has_issues.or(self.has_issues),
            has_projects: overrides.has_projects.or(self.has_projects),
            has_wiki: overrides.has_wiki.or(self.has_wiki),
            auto_init: overrides.auto_init.or(self.auto_init),
            branch: overrides.branch.or(self.branch),
            web_url: overrides.web_url.or(self.web_url),
            api_url: overrides.api_url.or(self.api_url),
            ssh_host: overrides.ssh_host.or(self.ssh_host),
            next_steps: if overrides.next_steps.is_empty() {
                self.next_steps
            } else {
                overrides.next_steps
            },
        }
    }
}
