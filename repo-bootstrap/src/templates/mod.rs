//! Next-step hint rendering using Handlebars.
//!
//! Hints come from the `next-steps` list in the config file and may refer to
//! the finished repository, e.g. `Open {{repo_url}}/settings`.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, HintContext, TemplateRenderer};

/// The hint that is always shown first.
pub const VERIFY_HINT: &str = "Verify repository: {{repo_url}}";
