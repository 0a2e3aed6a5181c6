//! Orchestrates a full bootstrap: token, repository, push.

mod config;
mod error;
mod report;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::credentials::TokenResolver;
use crate::publisher::{manual_commands, CommandRunner, Publisher, SystemCommandRunner};
use crate::repository::{CreationOutcome, GitHubCreator, RepositoryCreator};
use crate::templates::{HintContext, TemplateRenderer, VERIFY_HINT};
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Exit status for a completed run.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status for every aborted run.
pub const EXIT_FAILURE: u8 = 1;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Browser URL of the repository.
    pub repo_url: String,
    /// API outcome; `None` for dry runs.
    pub outcome: Option<CreationOutcome>,
    /// Whether this was a dry run.
    pub dry_run: bool,
}

/// Maps a run result to the process exit status.
#[must_use]
pub fn exit_code(result: &Result<RunReport, RunnerError>) -> u8 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(_) => EXIT_FAILURE,
    }
}

/// Sequences credential resolution, repository creation and publishing.
pub struct Runner<C, R> {
    config: RunnerConfig,
    resolver: TokenResolver,
    creator: C,
    publisher: Publisher<R>,
    renderer: TemplateRenderer,
}

impl Runner<GitHubCreator, SystemCommandRunner> {
    /// Builds a runner that talks to the configured host and runs the real
    /// `git`, in `repo_dir` if given.
    pub fn standard(config: RunnerConfig, repo_dir: Option<PathBuf>) -> Self {
        let creator = GitHubCreator::new(config.host().clone());
        let command_runner = match repo_dir {
            Some(dir) => SystemCommandRunner::in_dir(dir),
            None => SystemCommandRunner::new(),
        };
        Self::new(config, TokenResolver::standard(), creator, command_runner)
    }
}

impl<C: RepositoryCreator, R: CommandRunner> Runner<C, R> {
    pub fn new(
        config: RunnerConfig,
        resolver: TokenResolver,
        creator: C,
        command_runner: R,
    ) -> Self {
        let publisher = Publisher::new(command_runner, config.host().clone(), config.branch());
        Self {
            config,
            resolver,
            creator,
            publisher,
            renderer: TemplateRenderer::new(),
        }
    }

    /// Executes the full flow, writing progress to `out`.
    ///
    /// Every abort has already been explained on `out` (including the manual
    /// commands that finish the job) by the time the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] when no token is found, the API rejects the
    /// request, the push fails, or `out` cannot be written.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<RunReport, RunnerError> {
        let spec = self.config.spec();
        let host = self.config.host();
        let remote_url = self.publisher.remote_url(spec.owner(), spec.name());

        report::header(out, spec)?;

        writeln!(out, "1. Getting GitHub authentication token...")?;
        let Some(token) = self.resolver.resolve().await else {
            error!("No token found in any source");
            report::missing_credentials(out, spec, host, &remote_url, self.config.branch())?;
            return Err(RunnerError::MissingCredential);
        };
        writeln!(out, "✓ GitHub token found")?;

        if self.config.dry_run() {
            let steps = self.publisher.plan(spec.owner(), spec.name());
            report::dry_run_preview(out, spec, host, &steps)?;
            return Ok(RunReport {
                repo_url: host.repository_url(spec.owner(), spec.name()),
                outcome: None,
                dry_run: true,
            });
        }

        writeln!(out, "\n2. Creating GitHub repository...")?;
        let outcome = self.creator.create(&token, spec).await;
        let repo_url = match &outcome {
            CreationOutcome::Created { url } => {
                writeln!(out, "✓ Repository created: {url}")?;
                url.clone()
            }
            CreationOutcome::AlreadyExists { url } => {
                warn!(url = %url, "Repository already exists");
                writeln!(out, "⚠ Repository might already exist, continuing...")?;
                url.clone()
            }
            CreationOutcome::Failed { message } => {
                report::creation_failed(out, message)?;
                return Err(RunnerError::ApiRequestFailed {
                    message: message.clone(),
                });
            }
        };

        writeln!(out, "\n3. Configuring git remote and pushing code...")?;
        if let Err(e) = self.publisher.publish(spec.owner(), spec.name()).await {
            error!(error = %e, "Publishing failed");
            let commands = manual_commands(&remote_url, self.publisher.branch());
            report::manual_push(out, &e.diagnostics(), &commands)?;
            return Err(e.into());
        }
        writeln!(out, "✓ Code pushed to {}", host.ssh_host())?;

        let hints = self.render_hints(&repo_url, &outcome);
        report::success(out, &repo_url, &hints)?;

        info!(url = %repo_url, "Bootstrap complete");
        Ok(RunReport {
            repo_url,
            outcome: Some(outcome),
            dry_run: false,
        })
    }

    /// Renders the verify hint followed by the configured ones. A hint that
    /// fails to render is shown verbatim.
    fn render_hints(&self, repo_url: &str, outcome: &CreationOutcome) -> Vec<String> {
        let spec = self.config.spec();
        let context = HintContext {
            repo_url,
            owner: spec.owner(),
            name: spec.name(),
            branch: self.config.branch(),
            outcome: outcome.as_str(),
        };

        std::iter::once(VERIFY_HINT)
            .chain(self.config.next_steps().iter().map(String::as_str))
            .map(|template| {
                self.renderer
                    .render_hint(template, &context)
                    .unwrap_or_else(|e| {
                        warn!(template, error = %e, "Failed to render hint");
                        template.to_string()
                    })
            })
            .collect()
    }
}
