//! Repository creation through the hosting API.
//!
//! One authenticated `POST /user/repos` is sent; the response is mapped to a
//! [`CreationOutcome`]. Nothing is retried.

mod classify;
mod outcome;
mod request;

pub use classify::{classify_response, is_name_conflict, GENERIC_CREATION_FAILURE};
pub use outcome::CreationOutcome;
pub use request::{ApiErrorBody, CreateRepoRequest, CreatedRepository};

use crate::config::{ForgeHost, RepoSpec};
use crate::credentials::Token;
use async_trait::async_trait;
use http::header::{ACCEPT, AUTHORIZATION};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use tracing::{debug, info, info_span, warn, Instrument};

/// Media type requesting the v3 REST API.
pub const ACCEPT_V3: &str = "application/vnd.github.v3+json";

/// Creates remote repositories.
#[async_trait]
pub trait RepositoryCreator: Send + Sync {
    /// Asks the hosting service to create `spec`. Never errors; failures are
    /// reported as [`CreationOutcome::Failed`].
    async fn create(&self, token: &Token, spec: &RepoSpec) -> CreationOutcome;
}

/// [`RepositoryCreator`] backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubCreator {
    host: ForgeHost,
}

impl GitHubCreator {
    pub fn new(host: ForgeHost) -> Self {
        Self { host }
    }

    /// Builds a client that sends `Authorization: token <T>` and the v3
    /// `Accept` header. Retries are disabled.
    fn client(&self, token: &Token) -> Result<Octocrab, octocrab::Error> {
        Octocrab::builder()
            .base_uri(self.host.api_url())?
            .add_header(AUTHORIZATION, format!("token {}", token.expose()))
            .add_header(ACCEPT, ACCEPT_V3.to_string())
            .add_retry_config(RetryConfig::None)
            .build()
    }

    async fn send(&self, token: &Token, spec: &RepoSpec) -> Result<CreationOutcome, octocrab::Error> {
        let octocrab = self.client(token)?;
        let body = CreateRepoRequest::from(spec);

        let response = octocrab._post("/user/repos", Some(&body)).await?;
        let status = response.status();
        let text = octocrab.body_to_string(response).await?;
        debug!(status = %status, "Received repository creation response");

        Ok(classify_response(status, &text, spec, &self.host))
    }
}

#[async_trait]
impl RepositoryCreator for GitHubCreator {
    async fn create(&self, token: &Token, spec: &RepoSpec) -> CreationOutcome {
        let span = info_span!(
            "create_repository",
            repo = %spec.full_name(),
            api = %self.host.api_url()
        );

        async {
            info!("Creating repository");

            let outcome = match self.send(token, spec).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(error = %e, "Repository creation request failed");
                    CreationOutcome::Failed {
                        message: e.to_string(),
                    }
                }
            };

            info!(outcome = outcome.as_str(), "Repository creation finished");
            outcome
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    /// Minimal HTTP/1.1 server answering every request with one canned response.
    struct MockApi {
        api_url: String,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl MockApi {
        async fn start(status_line: &'static str, body: &'static str) -> Self {
            install_crypto_provider();
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let api_url = format!("http://{}/api/v3", listener.local_addr().unwrap());
            let requests = Arc::new(Mutex::new(Vec::new()));

            let recorded = Arc::clone(&requests);
            tokio::spawn(async move {
                while let Ok((mut stream, _)) = listener.accept().await {
                    let request = read_request(&mut stream).await;
                    recorded.lock().unwrap().push(request);

                    let response = format!(
                        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\n\
                         Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                }
            });

            Self { api_url, requests }
        }

        fn host(&self) -> ForgeHost {
            ForgeHost::new("https://github.com", &self.api_url, "github.com").unwrap()
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    async fn read_request(stream: &mut TcpStream) -> String {
        let mut data = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            let read = stream.read(&mut chunk).await.unwrap_or(0);
            if read == 0 {
                break;
            }
            data.extend_from_slice(&chunk[..read]);

            let text = String::from_utf8_lossy(&data).to_string();
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if data.len() >= end + 4 + content_length {
                    break;
                }
            }
        }

        String::from_utf8_lossy(&data).to_string()
    }

    /// Workspace builds enable both rustls backends, so pick one explicitly.
    fn install_crypto_provider() {
        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
    }

    fn token() -> Token {
        Token::new("tok").unwrap()
    }

    fn spec() -> RepoSpec {
        RepoSpec::new("octo", "FluxStudio").unwrap()
    }

    #[tokio::test]
    async fn created_response_sends_expected_request() {
        let api = MockApi::start(
            "201 Created",
            r#"{"html_url":"https://github.com/octo/FluxStudio"}"#,
        )
        .await;

        let outcome = GitHubCreator::new(api.host()).create(&token(), &spec()).await;

        assert_eq!(
            outcome,
            CreationOutcome::Created {
                url: "https://github.com/octo/FluxStudio".to_string()
            }
        );

        let requests = api.requests();
        assert_eq!(requests.len(), 1);
        let request = requests[0].to_lowercase();
        assert!(request.starts_with("post /api/v3/user/repos "));
        assert!(request.contains("authorization: token tok\r\n"));
        assert!(request.contains("accept: application/vnd.github.v3+json\r\n"));
        assert!(request.contains("content-type: application/json"));
        assert!(requests[0].contains(r#""name":"FluxStudio""#));
    }

    #[tokio::test]
    async fn name_conflict_is_already_exists() {
        let api = MockApi::start(
            "422 Unprocessable Entity",
            r#"{"message":"Validation Failed","errors":[{"field":"name","code":"already_exists"}]}"#,
        )
        .await;

        let outcome = GitHubCreator::new(api.host()).create(&token(), &spec()).await;

        assert_eq!(
            outcome,
            CreationOutcome::AlreadyExists {
                url: "https://github.com/octo/FluxStudio".to_string()
            }
        );
        assert_eq!(api.requests().len(), 1);
    }

    #[tokio::test]
    async fn bad_credentials_fail_without_retry() {
        let api = MockApi::start("401 Unauthorized", r#"{"message":"Bad credentials"}"#).await;

        let outcome = GitHubCreator::new(api.host()).create(&token(), &spec()).await;

        assert_eq!(
            outcome,
            CreationOutcome::Failed {
                message: "Bad credentials".to_string()
            }
        );
        assert_eq!(api.requests().len(), 1);
    }

    #[tokio::test]
    async fn unreachable_api_fails() {
        install_crypto_provider();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let api_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let host = ForgeHost::new("https://github.com", &api_url, "github.com").unwrap();

        let outcome = GitHubCreator::new(host).create(&token(), &spec()).await;

        assert!(matches!(outcome, CreationOutcome::Failed { .. }));
    }
}
