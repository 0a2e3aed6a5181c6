//! Token lookup through an external auth helper command.

use super::{Token, TokenSource};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// How long the auth helper may run before it is killed.
pub const HELPER_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs a command that prints a token on standard output.
///
/// The command succeeds when it exits with status 0 and prints something
/// other than whitespace. Anything else, including failing to start or
/// running past the timeout, counts as "no token here".
#[derive(Debug, Clone)]
pub struct HelperCommandSource {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl HelperCommandSource {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            timeout: HELPER_TIMEOUT,
        }
    }

    /// The GitHub CLI: `gh auth token`.
    pub fn github_cli() -> Self {
        Self::new("gh", ["auth", "token"])
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl TokenSource for HelperCommandSource {
    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    async fn fetch(&self) -> Option<Token> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(e) => {
                debug!(program = %self.program, error = %e, "Auth helper could not be started");
                return None;
            }
        };

        // Dropping the timed-out future drops the child, which kills it.
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                debug!(program = %self.program, error = %e, "Auth helper failed");
                return None;
            }
            Err(_) => {
                debug!(
                    program = %self.program,
                    timeout_secs = self.timeout.as_secs_f32(),
                    "Auth helper timed out"
                );
                return None;
            }
        };

        if !output.status.success() {
            debug!(program = %self.program, status = %output.status, "Auth helper exited unsuccessfully");
            return None;
        }

        match String::from_utf8(output.stdout) {
            Ok(stdout) => Token::new(stdout),
            Err(e) => {
                debug!(program = %self.program, error = %e, "Auth helper printed non-UTF-8 output");
                None
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn successful_helper_yields_trimmed_stdout() {
        let source = HelperCommandSource::new("sh", ["-c", "printf 'helper-token\\n'"]);

        let token = source.fetch().await.unwrap();
        assert_eq!(token.expose(), "helper-token");
    }

    #[tokio::test]
    async fn failing_helper_yields_nothing() {
        let source = HelperCommandSource::new("sh", ["-c", "echo not-a-token; exit 1"]);
        assert!(source.fetch().await.is_none());
    }

    #[tokio::test]
    async fn blank_output_yields_nothing() {
        let source = HelperCommandSource::new("sh", ["-c", "echo '   '"]);
        assert!(source.fetch().await.is_none());
    }

    #[tokio::test]
    async fn non_utf8_output_yields_nothing() {
        let source = HelperCommandSource::new("sh", ["-c", "printf '\\377\\376x'"]);
        assert!(source.fetch().await.is_none());
    }

    #[tokio::test]
    async fn non_utf8_output_falls_through_to_next_source() {
        let resolver = crate::credentials::TokenResolver::new(vec![
            Box::new(HelperCommandSource::new("sh", ["-c", "printf '\\377\\376garbage'"])),
            Box::new(HelperCommandSource::new("sh", ["-c", "printf 'next-token'"])),
        ]);

        let token = resolver.resolve().await.unwrap();
        assert_eq!(token.expose(), "next-token");
    }

    #[tokio::test]
    async fn missing_program_yields_nothing() {
        let source = HelperCommandSource::new("repo-bootstrap-no-such-helper", ["auth", "token"]);
        assert!(source.fetch().await.is_none());
    }

    #[tokio::test]
    async fn slow_helper_times_out() {
        let source = HelperCommandSource::new("sh", ["-c", "sleep 5; echo late"])
            .with_timeout(Duration::from_millis(100));

        let started = std::time::Instant::now();
        assert!(source.fetch().await.is_none());
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn describes_command_line() {
        assert_eq!(HelperCommandSource::github_cli().describe(), "gh auth token");
    }
}
