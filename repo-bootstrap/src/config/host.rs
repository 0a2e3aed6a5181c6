//! Hosting service endpoints.

use crate::config::ConfigError;
use url::Url;

/// Default web base URL.
pub const DEFAULT_WEB_URL: &str = "https://github.com";

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default host for SSH remotes.
pub const DEFAULT_SSH_HOST: &str = "github.com";

/// Where repositories are created and pushed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeHost {
    web_url: String,
    api_url: String,
    ssh_host: String,
}

impl Default for ForgeHost {
    fn default() -> Self {
        Self {
            web_url: DEFAULT_WEB_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            ssh_host: DEFAULT_SSH_HOST.to_string(),
        }
    }
}

impl ForgeHost {
    /// Creates a host description, validating both URLs.
    ///
    /// Trailing slashes are stripped so derived URLs never contain `//`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if a URL does not parse, is not
    /// http(s), or if `ssh_host` is empty.
    pub fn new(
        web_url: impl Into<String>,
        api_url: impl Into<String>,
        ssh_host: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let web_url = validate_base_url("web-url", web_url.into())?;
        let api_url = validate_base_url("api-url", api_url.into())?;
        let ssh_host = ssh_host.into().trim().to_string();

        if ssh_host.is_empty() || ssh_host.contains(['/', ':', '@']) {
            return Err(ConfigError::ValidationError {
                field: "ssh-host",
                message: format!("'{ssh_host}' is not a bare host name"),
            });
        }

        Ok(Self {
            web_url,
            api_url,
            ssh_host,
        })
    }

    pub fn web_url(&self) -> &str {
        &self.web_url
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn ssh_host(&self) -> &str {
        &self.ssh_host
    }

    /// Browser URL of `owner/name`.
    pub fn repository_url(&self, owner: &str, name: &str) -> String {
        format!("{}/{owner}/{name}", self.web_url)
    }

    /// SSH remote URL of `owner/name`, e.g. `git@github.com:owner/name.git`.
    pub fn ssh_remote_url(&self, owner: &str, name: &str) -> String {
        format!("git@{}:{owner}/{name}.git", self.ssh_host)
    }
}

fn validate_base_url(field: &'static str, value: String) -> Result<String, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|e| ConfigError::ValidationError {
        field,
        message: format!("'{value}' is not a valid URL: {e}"),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError {
            field,
            message: format!("'{value}' must use http or https"),
        });
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
