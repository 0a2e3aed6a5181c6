#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod credentials;
pub mod publisher;
pub mod repository;
pub mod runner;
pub mod templates;

pub use config::{
    load_config, BootstrapConfig, ConfigError, ConfigFile, ForgeHost, RepoSpec, DEFAULT_BRANCH,
};
pub use credentials::{
    EnvVarSource, HelperCommandSource, Token, TokenFileSource, TokenResolver, TokenSource,
};
pub use publisher::{
    manual_commands, publish_plan, CommandOutput, CommandRunner, PublishError, PublishStep,
    Publisher, StepPolicy, SystemCommandRunner,
};
pub use repository::{
    classify_response, is_name_conflict, CreationOutcome, GitHubCreator, RepositoryCreator,
};
pub use runner::{exit_code, RunReport, Runner, RunnerConfig, RunnerError};
pub use templates::{HintContext, TemplateError, TemplateRenderer};
