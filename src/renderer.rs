//! Template rendering for Stencil.
//! The rendering engine sits behind a narrow trait so the loading and
//! orchestration logic can be tested against a substitute renderer.

use crate::error::{Error, Result};
use minijinja::{Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer with strict undefined-variable behavior, so a
    /// reference to a variable missing from the context fails the render
    /// instead of expanding to an empty string. The trailing newline is
    /// kept: rendering is substitution only, a file's final newline is not
    /// the engine's to drop.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateError` on malformed template syntax or an
    ///   unresolvable variable reference
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env
            .render_str(template, context)
            .map_err(|e| Error::TemplateError(e.to_string()))
    }
}
