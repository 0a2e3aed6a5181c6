//! Configuration loading and validation.
//!
//! Settings come from an optional `repo-bootstrap.toml` file with command-line
//! overrides layered on top. The result is an immutable [`BootstrapConfig`].

mod error;
mod file;
mod host;
mod repo_spec;

pub use error::ConfigError;
pub use file::ConfigFile;
pub use host::{ForgeHost, DEFAULT_API_URL, DEFAULT_SSH_HOST, DEFAULT_WEB_URL};
pub use repo_spec::RepoSpec;

use bstr::ByteSlice;
use std::path::Path;
use tracing::debug;

/// Branch pushed when none is configured.
pub const DEFAULT_BRANCH: &str = "main";

/// Fully resolved and validated settings for one run.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Repository to create.
    pub spec: RepoSpec,

    /// Hosting service endpoints.
    pub host: ForgeHost,

    /// Branch the local history is pushed to.
    pub branch: String,

    /// Extra hints printed after a successful run.
    pub next_steps: Vec<String>,
}

impl BootstrapConfig {
    /// Validates merged settings and builds the run configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSetting`] if `owner` or `name` is absent and
    /// [`ConfigError::ValidationError`] if any value is invalid.
    pub fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let owner = file
            .owner
            .ok_or(ConfigError::MissingSetting { field: "owner" })?;
        let name = file.name.ok_or(ConfigError::MissingSetting { field: "name" })?;

        let spec = RepoSpec::new(owner, name)?
            .with_description(file.description.unwrap_or_default())
            .with_private(file.private.unwrap_or(false))
            .with_features(
                file.has_issues.unwrap_or(true),
                file.has_projects.unwrap_or(true),
                file.has_wiki.unwrap_or(false),
            )
            .with_auto_init(file.auto_init.unwrap_or(false));

        let host = ForgeHost::new(
            file.web_url.unwrap_or_else(|| DEFAULT_WEB_URL.to_string()),
            file.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            file.ssh_host.unwrap_or_else(|| DEFAULT_SSH_HOST.to_string()),
        )?;

        let branch = file.branch.unwrap_or_else(|| DEFAULT_BRANCH.to_string());
        validate_branch_name(&branch)?;

        Ok(Self {
            spec,
            host,
            branch,
            next_steps: file.next_steps,
        })
    }
}

/// Loads the optional config file, applies `overrides` and validates the result.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or parsed, or if the
/// merged settings are incomplete or invalid.
pub fn load_config(
    config_path: Option<&Path>,
    overrides: ConfigFile,
) -> Result<BootstrapConfig, ConfigError> {
    let base = match config_path {
        Some(path) => ConfigFile::load(path)?,
        None => {
            debug!("No config file given, using command-line settings only");
            ConfigFile::default()
        }
    };

    BootstrapConfig::from_file(base.merge(overrides))
}

/// Checks that `branch` is usable as a short git branch name.
fn validate_branch_name(branch: &str) -> Result<(), ConfigError> {
    gix_validate::reference::name_partial(branch.as_bytes().as_bstr())
        .map(|_| ())
        .map_err(|e| ConfigError::ValidationError {
            field: "branch",
            message: format!("'{branch}' is not a valid branch name: {e}"),
        })
}
