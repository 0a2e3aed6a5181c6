//! Console banners and manual fallback instructions.

use crate::config::{ForgeHost, RepoSpec};
use crate::publisher::PublishStep;
use crate::repository::CreateRepoRequest;
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

fn rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

/// Opening banner.
pub(crate) fn header(out: &mut impl Write, spec: &RepoSpec) -> io::Result<()> {
    rule(out)?;
    writeln!(out, "{} - GitHub Repository Creation", spec.name())?;
    rule(out)?;
    writeln!(out)
}

/// Lists every way to provide a token, plus fully manual setup.
pub(crate) fn missing_credentials(
    out: &mut impl Write,
    spec: &RepoSpec,
    host: &ForgeHost,
    remote_url: &str,
    branch: &str,
) -> io::Result<()> {
    writeln!(out, "\n❌ No GitHub token found!")?;
    writeln!(out)?;
    writeln!(out, "Please set up authentication using one of these methods:")?;
    writeln!(out)?;
    writeln!(out, "Option 1: GitHub CLI")?;
    writeln!(out, "  gh auth login")?;
    writeln!(out)?;
    writeln!(out, "Option 2: Environment Variable")?;
    writeln!(out, "  export GITHUB_TOKEN='your_token_here'")?;
    writeln!(out)?;
    writeln!(out, "Option 3: Create token manually")?;
    writeln!(out, "  1. Go to: {}/settings/tokens/new", host.web_url())?;
    writeln!(out, "  2. Select scopes: repo (all)")?;
    writeln!(out, "  3. Generate token")?;
    writeln!(out, "  4. Save to ~/.github_token")?;
    writeln!(out)?;
    writeln!(out, "Option 4: Manual Setup")?;
    writeln!(out, "  1. Go to: {}/new", host.web_url())?;
    writeln!(out, "  2. Name: {}", spec.name())?;
    writeln!(out, "  3. Visibility: {}", spec.visibility())?;
    writeln!(out, "  4. Don't initialize")?;
    writeln!(out, "  5. Run: git remote add origin {remote_url}")?;
    writeln!(out, "  6. Run: git push -u origin {branch}")
}

/// Creation failure details.
pub(crate) fn creation_failed(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "\n❌ Failed to create repository")?;
    writeln!(out, "Error: {message}")
}

/// Push failure details and the commands that finish the job by hand.
pub(crate) fn manual_push(
    out: &mut impl Write,
    diagnostics: &str,
    commands: &[String],
) -> io::Result<()> {
    writeln!(out, "\n❌ Failed to push: {diagnostics}")?;
    writeln!(out, "\n⚠ Failed to push code automatically")?;
    writeln!(out, "\nManual push commands:")?;
    for command in commands {
        writeln!(out, "  {command}")?;
    }
    Ok(())
}

/// Final banner with the repository URL and numbered hints.
pub(crate) fn success(out: &mut impl Write, repo_url: &str, hints: &[String]) -> io::Result<()> {
    writeln!(out)?;
    rule(out)?;
    writeln!(out, "✓ GitHub Repository Setup Complete!")?;
    rule(out)?;
    writeln!(out)?;
    writeln!(out, "Repository URL: {repo_url}")?;
    writeln!(out)?;
    writeln!(out, "Next Steps:")?;
    for (i, hint) in hints.iter().enumerate() {
        writeln!(out, "  {}. {hint}", i + 1)?;
    }
    writeln!(out)
}

/// What a live run would do.
pub(crate) fn dry_run_preview(
    out: &mut impl Write,
    spec: &RepoSpec,
    host: &ForgeHost,
    steps: &[PublishStep],
) -> io::Result<()> {
    let body = serde_json::to_string_pretty(&CreateRepoRequest::from(spec))
        .map_err(io::Error::other)?;

    writeln!(out, "\n[DRY RUN] Repository: {}", spec.full_name())?;
    writeln!(out, "  Would send: POST {}/user/repos", host.api_url())?;
    for line in body.lines() {
        writeln!(out, "    {line}")?;
    }

    writeln!(out, "  Would run:")?;
    for step in steps {
        writeln!(out, "    {} ({:?})", step.command_line(), step.policy)?;
    }

    writeln!(
        out,
        "  Repository URL would be: {}",
        host.repository_url(spec.owner(), spec.name())
    )?;
    writeln!(out)
}
