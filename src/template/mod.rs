//! Template rendering for message bodies.
//!
//! The [`TemplateRenderer`] trait is the seam between the mailer and any
//! template engine; [`TeraRenderer`] is the filesystem-backed implementation
//! the crate ships, rendering named templates from a search directory and
//! keeping a render cache under `<search path>/cache/`.

mod tera_renderer;

pub use tera_renderer::TeraRenderer;

use crate::error::Result;

/// Directory the template-body setters look in when no search path is given.
pub const DEFAULT_TEMPLATE_DIR: &str = "templates/";

/// Renders a named template with a variable mapping into body text.
///
/// Implementations decide how names map to template sources and how strict
/// rendering is about missing variables; failures of any kind surface as
/// [`Error::TemplateRender`](crate::Error::TemplateRender).
pub trait TemplateRenderer {
    /// Renders `name` with `vars` into the final body text.
    fn render(&self, name: &str, vars: &serde_json::Value) -> Result<String>;
}
