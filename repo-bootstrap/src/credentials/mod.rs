//! Credential resolution.
//!
//! A token is looked up in a fixed, ordered list of [`TokenSource`]s. The
//! first source that produces a token wins and later sources are never
//! consulted. A source that has nothing to offer, for whatever reason, simply
//! hands over to the next one.

mod env;
mod file;
mod helper;
mod token;

pub use env::EnvVarSource;
pub use file::TokenFileSource;
pub use helper::{HelperCommandSource, HELPER_TIMEOUT};
pub use token::Token;

use async_trait::async_trait;
use tracing::{debug, info};

/// Environment variables checked for a token, in priority order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Token files checked relative to the home directory, in priority order.
pub const TOKEN_FILES: [&str; 2] = [".github_token", ".config/gh/token"];

/// A place a token may be found.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Short description used in logs. Never includes the token.
    fn describe(&self) -> String;

    /// Returns the token if this source has one.
    async fn fetch(&self) -> Option<Token>;
}

/// Walks an ordered list of sources and returns the first token found.
pub struct TokenResolver {
    sources: Vec<Box<dyn TokenSource>>,
}

impl TokenResolver {
    pub fn new(sources: Vec<Box<dyn TokenSource>>) -> Self {
        Self { sources }
    }

    /// The standard chain: `gh auth token`, then [`TOKEN_ENV_VARS`], then
    /// [`TOKEN_FILES`] under the home directory.
    pub fn standard() -> Self {
        let mut sources: Vec<Box<dyn TokenSource>> =
            vec![Box::new(HelperCommandSource::github_cli())];

        sources.extend(
            TOKEN_ENV_VARS
                .iter()
                .map(|var| Box::new(EnvVarSource::new(*var)) as Box<dyn TokenSource>),
        );

        sources.extend(
            TOKEN_FILES
                .iter()
                .filter_map(|file| TokenFileSource::in_home(file))
                .map(|source| Box::new(source) as Box<dyn TokenSource>),
        );

        Self::new(sources)
    }

    /// Descriptions of the configured sources, in lookup order.
    pub fn describe_sources(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.describe()).collect()
    }

    /// Returns the first token any source produces, or `None` if all come up empty.
    pub async fn resolve(&self) -> Option<Token> {
        for source in &self.sources {
            debug!(source = %source.describe(), "Trying token source");
            if let Some(token) = source.fetch().await {
                info!(source = %source.describe(), "Token found");
                return Some(token);
            }
        }

        debug!(tried = self.sources.len(), "No token source produced a token");
        None
    }
}
