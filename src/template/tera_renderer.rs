use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tera::{Context, Tera};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::template::TemplateRenderer;

/// Filesystem-backed [`TemplateRenderer`] using the Tera engine.
///
/// Template names are paths relative to the search directory. Rendering is
/// strict: a variable the template references but the mapping lacks is a
/// render error, as is a missing template file or a template syntax error.
///
/// ## Render cache
///
/// Output is cached under `<search path>/cache/`, keyed by template name and
/// the serialized variables. A later render of the same pair is served from
/// the cache without consulting the template file, so editing a template
/// does not invalidate entries. Delete the cache directory to force re-rendering.
/// If the cache directory cannot be created the renderer still works, just
/// without caching.
pub struct TeraRenderer {
    search_path: PathBuf,
    cache_dir: Option<PathBuf>,
}

impl TeraRenderer {
    /// Creates a renderer rooted at `search_path`.
    ///
    /// # Errors
    /// Returns [`Error::TemplateRender`] when `search_path` is not an
    /// existing directory.
    pub fn new(search_path: impl AsRef<Path>) -> Result<Self> {
        let search_path = search_path.as_ref().to_path_buf();
        if !search_path.is_dir() {
            return Err(Error::TemplateRender(tera::Error::msg(format!(
                "template directory {} does not exist",
                search_path.display()
            ))));
        }

        let cache_dir = search_path.join("cache");
        let cache_dir = match fs::create_dir_all(&cache_dir) {
            Ok(()) => Some(cache_dir),
            Err(e) => {
                warn!("render cache disabled: {e}");
                None
            }
        };

        Ok(Self {
            search_path,
            cache_dir,
        })
    }

    /// The directory template names are resolved against.
    pub fn search_path(&self) -> &Path {
        &self.search_path
    }

    fn cache_file(&self, name: &str, vars_json: &str) -> Option<PathBuf> {
        let dir = self.cache_dir.as_ref()?;
        let mut hasher = Sha256::new();
        hasher.update(name.as_bytes());
        hasher.update([0u8]);
        hasher.update(vars_json.as_bytes());
        let digest = hasher.finalize();
        let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
        Some(dir.join(format!("{hex}.html")))
    }
}

impl TemplateRenderer for TeraRenderer {
    fn render(&self, name: &str, vars: &serde_json::Value) -> Result<String> {
        let vars_json = vars.to_string();

        let cache_file = self.cache_file(name, &vars_json);
        if let Some(file) = &cache_file {
            if let Ok(cached) = fs::read_to_string(file) {
                debug!("render cache hit for '{name}'");
                return Ok(cached);
            }
        }

        let mut engine = Tera::default();
        engine.add_template_file(self.search_path.join(name), Some(name))?;
        let context = Context::from_serialize(vars)?;
        let rendered = engine.render(name, &context)?;

        if let Some(file) = &cache_file {
            if let Err(e) = fs::write(file, &rendered) {
                warn!("render cache write failed: {e}");
            }
        }

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "mailsmith-tpl-{}",
            uuid::Uuid::new_v4().simple()
        ));
        fs::create_dir_all(&dir).expect("template dir");
        dir
    }

    #[test]
    fn renders_a_template_with_variables() {
        let dir = template_dir();
        fs::write(dir.join("welcome.html"), "<p>Hello {{ name }}</p>").unwrap();

        let renderer = TeraRenderer::new(&dir).unwrap();
        let out = renderer
            .render("welcome.html", &json!({"name": "Mery"}))
            .unwrap();
        assert_eq!(out, "<p>Hello Mery</p>");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_template_is_a_render_error() {
        let dir = template_dir();
        let renderer = TeraRenderer::new(&dir).unwrap();

        let result = renderer.render("ghost.html", &json!({}));
        assert!(matches!(result, Err(Error::TemplateRender(_))));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_variable_is_a_render_error() {
        let dir = template_dir();
        fs::write(dir.join("strict.html"), "{{ required }}").unwrap();

        let renderer = TeraRenderer::new(&dir).unwrap();
        let result = renderer.render("strict.html", &json!({}));
        assert!(matches!(result, Err(Error::TemplateRender(_))));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_search_directory_fails_at_construction() {
        let result = TeraRenderer::new("/definitely/not/a/template/dir");
        assert!(matches!(result, Err(Error::TemplateRender(_))));
    }

    #[test]
    fn same_name_and_vars_hit_the_cache() {
        let dir = template_dir();
        fs::write(dir.join("cached.html"), "v1 {{ n }}").unwrap();

        let renderer = TeraRenderer::new(&dir).unwrap();
        let first = renderer.render("cached.html", &json!({"n": 1})).unwrap();
        assert_eq!(first, "v1 1");

        // The cache does not watch the template file.
        fs::write(dir.join("cached.html"), "v2 {{ n }}").unwrap();
        let second = renderer.render("cached.html", &json!({"n": 1})).unwrap();
        assert_eq!(second, "v1 1");

        // Different variables miss the cache and see the new source.
        let third = renderer.render("cached.html", &json!({"n": 2})).unwrap();
        assert_eq!(third, "v2 2");

        fs::remove_dir_all(&dir).ok();
    }
}
