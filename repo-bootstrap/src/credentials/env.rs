//! Token lookup through environment variables.

use super::{Token, TokenSource};
use async_trait::async_trait;
use tracing::debug;

/// Reads a token from one environment variable.
///
/// Unset, empty and non-UTF-8 values all count as absent.
#[derive(Debug, Clone)]
pub struct EnvVarSource {
    var: String,
}

impl EnvVarSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Reads the variable now.
    pub fn read(&self) -> Option<Token> {
        match std::env::var(&self.var) {
            Ok(value) => Token::new(value),
            Err(e) => {
                debug!(var = %self.var, error = %e, "Environment variable not usable");
                None
            }
        }
    }
}

#[async_trait]
impl TokenSource for EnvVarSource {
    fn describe(&self) -> String {
        format!("${}", self.var)
    }

    async fn fetch(&self) -> Option<Token> {
        self.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VAR: &str = "REPO_BOOTSTRAP_TEST_ENV_TOKEN";

    #[test]
    fn reads_set_variable() {
        let token = temp_env::with_var(VAR, Some(" env-token "), || {
            EnvVarSource::new(VAR).read()
        });
        assert_eq!(token.unwrap().expose(), "env-token");
    }

    #[test]
    fn unset_variable_is_absent() {
        let token = temp_env::with_var_unset(VAR, || EnvVarSource::new(VAR).read());
        assert!(token.is_none());
    }

    #[test]
    fn empty_variable_is_absent() {
        let token = temp_env::with_var(VAR, Some(""), || EnvVarSource::new(VAR).read());
        assert!(token.is_none());
    }

    #[test]
    fn describes_variable() {
        assert_eq!(EnvVarSource::new("GH_TOKEN").describe(), "$GH_TOKEN");
    }
}
