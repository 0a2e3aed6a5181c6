//! Repository definition sent to the hosting API.

use crate::config::ConfigError;

/// The repository to create.
///
/// Built once at startup and passed by reference to every component.
/// `owner` and `name` are always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSpec {
    owner: String,
    name: String,
    description: String,
    private: bool,
    has_issues: bool,
    has_projects: bool,
    has_wiki: bool,
    auto_init: bool,
}

impl RepoSpec {
    /// Creates a public repository definition with issues and projects enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if `owner` or `name` is empty
    /// or contains whitespace or `/`.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self, ConfigError> {
        let owner = owner.into();
        let name = name.into();
        validate_path_segment("owner", &owner)?;
        validate_path_segment("name", &name)?;

        Ok(Self {
            owner,
            name,
            description: String::new(),
            private: false,
            has_issues: true,
            has_projects: true,
            has_wiki: false,
            auto_init: false,
        })
    }

    /// Sets the repository description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets whether the repository is private.
    #[must_use]
    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    /// Sets which optional features are enabled.
    #[must_use]
    pub fn with_features(mut self, has_issues: bool, has_projects: bool, has_wiki: bool) -> Self {
        self.has_issues = has_issues;
        self.has_projects = has_projects;
        self.has_wiki = has_wiki;
        self
    }

    /// Sets whether the hosting service creates an initial commit.
    #[must_use]
    pub fn with_auto_init(mut self, auto_init: bool) -> Self {
        self.auto_init = auto_init;
        self
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn private(&self) -> bool {
        self.private
    }

    pub fn has_issues(&self) -> bool {
        self.has_issues
    }

    pub fn has_projects(&self) -> bool {
        self.has_projects
    }

    pub fn has_wiki(&self) -> bool {
        self.has_wiki
    }

    pub fn auto_init(&self) -> bool {
        self.auto_init
    }

    /// Returns `owner/name`.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Human-readable visibility, as shown in manual setup instructions.
    pub fn visibility(&self) -> &'static str {
        if self.private {
            "Private"
        } else {
            "Public"
        }
    }
}

fn validate_path_segment(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field,
            message: "must not be empty".to_string(),
        });
    }

    if value.contains('/') || value.chars().any(char::is_whitespace) {
        return Err(ConfigError::ValidationError {
            field,
            message: format!("'{value}' must not contain '/' or whitespace"),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_spec_uses_defaults() {
        let spec = RepoSpec::new("octo", "FluxStudio").unwrap();

        assert_eq!(spec.full_name(), "octo/FluxStudio");
        assert_eq!(spec.description(), "");
        assert!(!spec.private());
        assert!(spec.has_issues());
        assert!(spec.has_projects());
        assert!(!spec.has_wiki());
        assert!(!spec.auto_init());
        assert_eq!(spec.visibility(), "Public");
    }

    #[test]
    fn builder_methods_apply() {
        let spec = RepoSpec::new("octo", "FluxStudio")
            .unwrap()
            .with_description("desc")
            .with_private(true)
            .with_features(false, false, true)
            .with_auto_init(true);

        assert_eq!(spec.description(), "desc");
        assert!(spec.private());
        assert!(!spec.has_issues());
        assert!(!spec.has_projects());
        assert!(spec.has_wiki());
        assert!(spec.auto_init());
        assert_eq!(spec.visibility(), "Private");
    }

    #[test]
    fn rejects_empty_owner() {
        let result = RepoSpec::new("  ", "FluxStudio");
        assert!(matches!(
            result,
            Err(ConfigError::ValidationError { field: "owner", .. })
        ));
    }

    #[test]
    fn rejects_name_with_slash() {
        let result = RepoSpec::new("octo", "a/b");
        assert!(matches!(
            result,
            Err(ConfigError::ValidationError { field: "name", .. })
        ));
    }
}
