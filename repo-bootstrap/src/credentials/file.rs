//! Token lookup through files on disk.

use super::{Token, TokenSource};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads a token from a file; surrounding whitespace is trimmed.
///
/// Missing, unreadable and blank files all count as absent.
#[derive(Debug, Clone)]
pub struct TokenFileSource {
    path: PathBuf,
}

impl TokenFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A file relative to the user's home directory, if one is known.
    pub fn in_home(relative: impl AsRef<Path>) -> Option<Self> {
        dirs::home_dir().map(|home| Self::new(home.join(relative)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenSource for TokenFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Option<Token> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Token::new(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Token file not found");
                None
            }
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "Token file not readable");
                None
            }
        }
    }
}
