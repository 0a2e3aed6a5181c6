//! Interpretation of repository creation responses.
//!
//! Whether an error means "the repository already exists" is not something the
//! API states outright. [`is_name_conflict`] holds the pattern matching for it
//! so it can be tested and replaced on its own.

use super::outcome::CreationOutcome;
use super::request::{ApiErrorBody, CreatedRepository};
use crate::config::{ForgeHost, RepoSpec};
use http::StatusCode;
use serde_json::Value;

/// Top-level message GitHub uses when creation fails validation.
pub const GENERIC_CREATION_FAILURE: &str = "Repository creation failed.";

/// Returns true if the error body looks like a repository name collision.
///
/// Matches an `errors` entry that references the `name` field, or the generic
/// creation-failure message.
#[must_use]
pub fn is_name_conflict(body: &ApiErrorBody) -> bool {
    let names_field = body
        .errors
        .iter()
        .flatten()
        .any(|entry| match entry {
            Value::Object(map) => map.get("field").and_then(Value::as_str) == Some("name"),
            Value::String(text) => text.to_lowercase().contains("name already exists"),
            _ => false,
        });

    names_field || body.message.as_deref() == Some(GENERIC_CREATION_FAILURE)
}

/// Maps an HTTP status and raw body to a [`CreationOutcome`].
#[must_use]
pub fn classify_response(
    status: StatusCode,
    body: &str,
    spec: &RepoSpec,
    host: &ForgeHost,
) -> CreationOutcome {
    if status.is_success() {
        return match serde_json::from_str::<CreatedRepository>(body) {
            Ok(CreatedRepository {
                html_url: Some(url),
            }) => CreationOutcome::Created { url },
            Ok(_) => CreationOutcome::Failed {
                message: format!("Response ({status}) did not include html_url: {body}"),
            },
            Err(e) => CreationOutcome::Failed {
                message: format!("Response ({status}) was not valid JSON: {e}"),
            },
        };
    }

    let error = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(error) => error,
        Err(_) => {
            return CreationOutcome::Failed {
                message: body.to_string(),
            }
        }
    };

    if is_name_conflict(&error) {
        return CreationOutcome::AlreadyExists {
            url: host.repository_url(spec.owner(), spec.name()),
        };
    }

    CreationOutcome::Failed {
        message: error.message.unwrap_or_else(|| body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> RepoSpec {
        RepoSpec::new("owner", "FluxStudio").unwrap()
    }

    fn host() -> ForgeHost {
        ForgeHost::new("https://host", "https://api.host", "host").unwrap()
    }

    fn error_body(json: &str) -> ApiErrorBody {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn created_response() {
        let outcome = classify_response(
            StatusCode::CREATED,
            r#"{"html_url": "https://host/owner/FluxStudio"}"#,
            &spec(),
            &host(),
        );

        assert_eq!(
            outcome,
            CreationOutcome::Created {
                url: "https://host/owner/FluxStudio".to_string()
            }
        );
    }

    #[test]
    fn name_conflict_is_already_exists() {
        let outcome = classify_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message":"Validation Failed","errors":[{"field":"name","code":"already_exists"}]}"#,
            &spec(),
            &host(),
        );

        assert_eq!(
            outcome,
            CreationOutcome::AlreadyExists {
                url: "https://host/owner/FluxStudio".to_string()
            }
        );
    }

    #[test]
    fn bad_credentials_is_failed() {
        let outcome = classify_response(
            StatusCode::UNAUTHORIZED,
            r#"{"message":"Bad credentials"}"#,
            &spec(),
            &host(),
        );

        assert_eq!(
            outcome,
            CreationOutcome::Failed {
                message: "Bad credentials".to_string()
            }
        );
    }

    #[test]
    fn non_json_error_keeps_raw_body() {
        let outcome = classify_response(
            StatusCode::BAD_GATEWAY,
            "<html>upstream unavailable</html>",
            &spec(),
            &host(),
        );

        assert_eq!(
            outcome,
            CreationOutcome::Failed {
                message: "<html>upstream unavailable</html>".to_string()
            }
        );
    }

    #[test]
    fn error_without_message_keeps_raw_body() {
        let outcome = classify_response(StatusCode::FORBIDDEN, "{}", &spec(), &host());

        assert_eq!(
            outcome,
            CreationOutcome::Failed {
                message: "{}".to_string()
            }
        );
    }

    #[test]
    fn success_without_html_url_is_failed() {
        let outcome = classify_response(StatusCode::CREATED, r#"{"id": 1}"#, &spec(), &host());
        assert!(matches!(outcome, CreationOutcome::Failed { .. }));
    }

    #[test]
    fn success_with_invalid_json_is_failed() {
        let outcome = classify_response(StatusCode::OK, "not json", &spec(), &host());
        assert!(matches!(outcome, CreationOutcome::Failed { .. }));
    }

    #[test]
    fn conflict_detection_patterns() {
        assert!(is_name_conflict(&error_body(
            r#"{"message":"Validation Failed","errors":[{"resource":"Repository","field":"name","code":"custom"}]}"#
        )));
        assert!(is_name_conflict(&error_body(
            r#"{"message":"Validation Failed","errors":["Name already exists on this account"]}"#
        )));
        assert!(is_name_conflict(&error_body(
            r#"{"message":"Repository creation failed."}"#
        )));

        assert!(!is_name_conflict(&error_body(
            r#"{"message":"Validation Failed","errors":[{"field":"description","code":"too_long"}]}"#
        )));
        assert!(!is_name_conflict(&error_body(r#"{"message":"Not Found"}"#)));
        assert!(!is_name_conflict(&ApiErrorBody::default()));
    }
}
