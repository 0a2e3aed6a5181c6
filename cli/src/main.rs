//! CLI for repo-bootstrap.
//!
//! Creates a GitHub repository for the current project and pushes the local
//! history to it.

use clap::Parser;
use repo_bootstrap::{
    exit_code, load_config, ConfigFile, RunReport, Runner, RunnerConfig, RunnerError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// repo-bootstrap - Create a GitHub repository and push the current branch to it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a repo-bootstrap.toml file.
    #[arg(long, env = "REPO_BOOTSTRAP_CONFIG")]
    config: Option<PathBuf>,

    /// Account that will own the repository.
    #[arg(long)]
    owner: Option<String>,

    /// Repository name.
    #[arg(long)]
    name: Option<String>,

    /// Repository description.
    #[arg(long)]
    description: Option<String>,

    /// Create a private repository.
    #[arg(long)]
    private: bool,

    /// Branch to push (default: main).
    #[arg(long)]
    branch: Option<String>,

    /// REST API base URL, for GitHub Enterprise.
    #[arg(long)]
    api_url: Option<String>,

    /// Directory of the local git repository (default: current directory).
    #[arg(long)]
    repo_dir: Option<PathBuf>,

    /// Preview the API request and git commands without running them.
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    /// Command-line values that override the config file.
    fn overrides(&self) -> ConfigFile {
        ConfigFile {
            owner: self.owner.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            private: self.private.then_some(true),
            branch: self.branch.clone(),
            api_url: self.api_url.clone(),
            ..Default::default()
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    install_crypto_provider();

    let args = Args::parse();

    let result = run(args).await;
    if let Err(e) = &result {
        error!(error = %e, "Bootstrap failed");
    }

    ExitCode::from(exit_code(&result))
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr in compact single-line form so they do not mix with the
/// progress output on stdout. `RUST_LOG` controls the level (default "warn").
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

/// Installs the process-wide rustls crypto provider used by octocrab.
///
/// Returns false if another provider was installed first.
fn install_crypto_provider() -> bool {
    match rustls::crypto::aws_lc_rs::default_provider().install_default() {
        Ok(()) => true,
        Err(_) => {
            debug!("A rustls crypto provider was already installed, keeping it");
            false
        }
    }
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunReport, RunnerError> {
    let bootstrap = match load_config(args.config.as_deref(), args.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            return Err(e.into());
        }
    };

    let runner = Runner::standard(RunnerConfig::new(bootstrap, args.dry_run), args.repo_dir);
    let mut stdout = std::io::stdout().lock();
    runner.run(&mut stdout).await
}
