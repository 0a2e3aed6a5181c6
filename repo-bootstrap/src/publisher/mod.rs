//! Remote configuration and push.
//!
//! Publishing runs the steps from [`publish_plan`] in order. Each step carries
//! a [`StepPolicy`]: ignorable failures are logged and skipped, a fatal
//! failure ends publishing with a [`PublishError`].

mod command;
mod error;
mod plan;

pub use command::{CommandOutput, CommandRunner, SystemCommandRunner};
pub use error::PublishError;
pub use plan::{manual_commands, publish_plan, PublishStep, StepPolicy, GIT, REMOTE_NAME};

use crate::config::ForgeHost;
use tracing::{info, info_span, Instrument};

/// Points `origin` at the new repository and pushes the branch.
pub struct Publisher<R> {
    runner: R,
    host: ForgeHost,
    branch: String,
}

impl<R: CommandRunner> Publisher<R> {
    pub fn new(runner: R, host: ForgeHost, branch: impl Into<String>) -> Self {
        Self {
            runner,
            host,
            branch: branch.into(),
        }
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    #[cfg(test)]
    pub(crate) fn runner(&self) -> &R {
        &self.runner
    }

    /// SSH remote URL for `owner/repo_name`.
    pub fn remote_url(&self, owner: &str, repo_name: &str) -> String {
        self.host.ssh_remote_url(owner, repo_name)
    }

    /// The steps [`Publisher::publish`] will run.
    pub fn plan(&self, owner: &str, repo_name: &str) -> Vec<PublishStep> {
        publish_plan(&self.remote_url(owner, repo_name), &self.branch)
    }

    /// Configures the remote and pushes.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] if a fatal step fails. Failures of ignorable
    /// steps are only logged.
    pub async fn publish(&self, owner: &str, repo_name: &str) -> Result<(), PublishError> {
        let span = info_span!(
            "publish",
            repo = %format!("{owner}/{repo_name}"),
            branch = %self.branch
        );

        async {
            for step in self.plan(owner, repo_name) {
                self.run_step(&step).await?;
            }

            info!("Branch pushed");
            Ok(())
        }
        .instrument(span)
        .await
    }

    async fn run_step(&self, step: &PublishStep) -> Result<(), PublishError> {
        let command = step.command_line();
        info!(step = step.description, command = %command, "Running git step");

        match (self.runner.run(GIT, &step.args).await, step.policy) {
            (Ok(output), _) if output.success => Ok(()),
            (Ok(output), StepPolicy::Ignorable) => {
                info!(
                    command = %command,
                    diagnostics = output.diagnostics(),
                    "Step failed, continuing"
                );
                Ok(())
            }
            (Ok(output), StepPolicy::Fatal) => Err(PublishError::PushFailed {
                command,
                diagnostics: output.diagnostics().to_string(),
            }),
            (Err(e), StepPolicy::Ignorable) => {
                info!(command = %command, error = %e, "Step could not run, continuing");
                Ok(())
            }
            (Err(e), StepPolicy::Fatal) => Err(PublishError::CommandFailed { command, source: e }),
        }
    }
}
