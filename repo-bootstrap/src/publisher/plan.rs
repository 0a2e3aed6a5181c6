//! The ordered git steps that publish the local history.

/// Name of the remote that is (re)created.
pub const REMOTE_NAME: &str = "origin";

/// Executable every step runs.
pub const GIT: &str = "git";

/// What a failing step means for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPolicy {
    /// Failure is logged and the next step runs.
    Ignorable,
    /// Failure stops publishing.
    Fatal,
}

/// One git invocation in the publish plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishStep {
    pub description: &'static str,
    pub args: Vec<String>,
    pub policy: StepPolicy,
}

impl PublishStep {
    fn new(description: &'static str, args: &[&str], policy: StepPolicy) -> Self {
        Self {
            description,
            args: args.iter().map(|arg| (*arg).to_string()).collect(),
            policy,
        }
    }

    /// The step as a shell command, e.g. `git push -u origin main`.
    #[must_use]
    pub fn command_line(&self) -> String {
        format!("{GIT} {}", self.args.join(" "))
    }
}

/// Steps that point `origin` at `remote_url` and push `branch` to it.
///
/// Removing and re-adding the remote fail harmlessly on first runs and reruns
/// respectively, and renaming the branch is best effort; only the push decides
/// whether publishing worked.
#[must_use]
pub fn publish_plan(remote_url: &str, branch: &str) -> Vec<PublishStep> {
    vec![
        PublishStep::new(
            "Remove existing remote",
            &["remote", "remove", REMOTE_NAME],
            StepPolicy::Ignorable,
        ),
        PublishStep::new(
            "Add remote",
            &["remote", "add", REMOTE_NAME, remote_url],
            StepPolicy::Ignorable,
        ),
        PublishStep::new("Rename branch", &["branch", "-M", branch], StepPolicy::Ignorable),
        PublishStep::new(
            "Push branch",
            &["push", "-u", REMOTE_NAME, branch],
            StepPolicy::Fatal,
        ),
    ]
}

/// Commands a user can run by hand to finish publishing.
#[must_use]
pub fn manual_commands(remote_url: &str, branch: &str) -> Vec<String> {
    // Removing a stale remote is only needed when rerunning automatically.
    publish_plan(remote_url, branch)
        .iter()
        .skip(1)
        .map(PublishStep::command_line)
        .collect()
}
