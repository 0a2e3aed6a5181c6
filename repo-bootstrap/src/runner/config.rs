//! Runner configuration.

use crate::config::{BootstrapConfig, ForgeHost, RepoSpec};

/// Configuration for a single run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Validated repository and host settings.
    bootstrap: BootstrapConfig,
    /// Whether to preview the request and git commands without running them.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(bootstrap: BootstrapConfig, dry_run: bool) -> Self {
        Self { bootstrap, dry_run }
    }

    /// Returns the repository to create.
    pub fn spec(&self) -> &RepoSpec {
        &self.bootstrap.spec
    }

    /// Returns the hosting service endpoints.
    pub fn host(&self) -> &ForgeHost {
        &self.bootstrap.host
    }

    /// Returns the branch that is pushed.
    pub fn branch(&self) -> &str {
        &self.bootstrap.branch
    }

    /// Returns the configured next-step hint templates.
    pub fn next_steps(&self) -> &[String] {
        &self.bootstrap.next_steps
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
