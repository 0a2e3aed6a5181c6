//! Template renderer.

use handlebars::{no_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde::Serialize;

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - No HTML escaping (hints are plain terminal text)
/// - Strict mode (catches misspelled variables)
/// - `eq` helper for equality comparisons
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs.register_helper("eq", Box::new(eq_helper));

    hbs
}

/// Helper function for equality comparison in templates.
///
/// Usage: `{{#if (eq outcome "created")}}...{{/if}}`
fn eq_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param1 = h.param(0).and_then(|v| v.value().as_str());
    let param2 = h.param(1).and_then(|v| v.value().as_str());

    let result = match (param1, param2) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    out.write(if result { "true" } else { "" })?;
    Ok(())
}

/// Values available to hint templates.
#[derive(Debug, Clone, Serialize)]
pub struct HintContext<'a> {
    pub repo_url: &'a str,
    pub owner: &'a str,
    pub name: &'a str,
    pub branch: &'a str,
    /// `created` or `already_exists`.
    pub outcome: &'a str,
}

/// Renders next-step hints.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders one hint.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is malformed or uses an unknown variable.
    pub fn render_hint(
        &self,
        template: &str,
        context: &HintContext<'_>,
    ) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> HintContext<'static> {
        HintContext {
            repo_url: "https://github.com/octo/FluxStudio",
            owner: "octo",
            name: "FluxStudio",
            branch: "main",
            outcome: "created",
        }
    }

    #[test]
    fn renders_variables() {
        let renderer = TemplateRenderer::new();

        let result = renderer
            .render_hint(crate::templates::VERIFY_HINT, &context())
            .unwrap();

        assert_eq!(result, "Verify repository: https://github.com/octo/FluxStudio");
    }

    #[test]
    fn renders_conditional_eq() {
        let renderer = TemplateRenderer::new();
        let template =
            r#"{{#if (eq outcome "created")}}New repository{{else}}Existing repository{{/if}}"#;

        assert_eq!(
            renderer.render_hint(template, &context()).unwrap(),
            "New repository"
        );
    }

    #[test]
    fn renders_conditional_eq_else_branch() {
        let renderer = TemplateRenderer::new();
        let context = HintContext {
            outcome: "already_exists",
            ..context()
        };
        let template = r#"{{#if (eq outcome "created")}}Add collaborators{{else}}Check existing collaborators{{/if}} at {{repo_url}}/settings/access"#;

        assert_eq!(
            renderer.render_hint(template, &context).unwrap(),
            "Check existing collaborators at https://github.com/octo/FluxStudio/settings/access"
        );
    }

    #[test]
    fn does_not_escape() {
        let renderer = TemplateRenderer::new();
        let result = renderer
            .render_hint("Run: git log {{branch}} > out.txt && less out.txt", &context())
            .unwrap();

        assert_eq!(result, "Run: git log main > out.txt && less out.txt");
    }

    #[test]
    fn unknown_variable_is_an_error() {
        let renderer = TemplateRenderer::new();
        assert!(renderer.render_hint("{{deploy_url}}", &context()).is_err());
    }
}
