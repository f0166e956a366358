//! Template loading and rendering

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use sweeprun::Declaration;
use tracing::{debug, info};

use super::context::{DriverContext, DriverOptions, ManifestContext};
use super::embedded;

/// Template name of the driver source skeleton
pub const DRIVER_TEMPLATE: &str = "driver.rs";

/// Template name of the driver package manifest
pub const MANIFEST_TEMPLATE: &str = "Cargo.toml";

/// Loads and renders driver templates
pub struct Renderer {
    /// Handlebars engine: strict, no HTML escaping
    hbs: Handlebars<'static>,
    /// Override directory holding `{name}.hbs` files
    template_dir: Option<PathBuf>,
}

impl Renderer {
    /// Create a renderer that prefers templates found in `template_dir`
    pub fn new(template_dir: Option<&Path>) -> Self {
        debug!(?template_dir, "Renderer::new: called");
        let template_dir = template_dir.filter(|dir| dir.is_dir()).map(Path::to_path_buf);
        if template_dir.is_none() {
            debug!("Renderer::new: no override directory, using embedded templates");
        }
        Self {
            hbs: engine(),
            template_dir,
        }
    }

    /// Create a renderer that only uses embedded templates
    pub fn embedded_only() -> Self {
        Self {
            hbs: engine(),
            template_dir: None,
        }
    }

    /// Load a template by name
    ///
    /// Checks in order:
    /// 1. Override: `{template_dir}/{name}.hbs`
    /// 2. Embedded fallback
    fn load_template(&self, name: &str) -> Result<String> {
        debug!(%name, "Renderer::load_template: called");
        if let Some(ref dir) = self.template_dir {
            let path = dir.join(format!("{}.hbs", name));
            if path.exists() {
                debug!(?path, "Renderer::load_template: found override");
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read template {}: {}", path.display(), e));
            }
            debug!(?path, "Renderer::load_template: no override");
        }

        embedded::get_embedded(name)
            .map(str::to_string)
            .ok_or_else(|| eyre!("Template not found: {}", name))
    }

    fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String> {
        let template = self.load_template(name)?;
        self.hbs
            .render_template(&template, context)
            .map_err(|e| eyre!("Failed to render template {}: {}", name, e))
    }

    /// Render driver source for a declaration
    pub fn render_driver(&self, declaration: &Declaration, options: &DriverOptions) -> Result<String> {
        debug!(parameters = declaration.len(), program = %options.program, "Renderer::render_driver: called");
        let source = self.render(DRIVER_TEMPLATE, &DriverContext::new(declaration, options))?;
        info!("Rendered driver for {} parameter(s)", declaration.len());
        Ok(source)
    }

    /// Render the `Cargo.toml` of a standalone driver package
    pub fn render_manifest(
        &self,
        package: &str,
        declaration: &Declaration,
        options: &DriverOptions,
        runtime_dependency: &str,
    ) -> Result<String> {
        debug!(%package, "Renderer::render_manifest: called");
        let context = ManifestContext::new(package, declaration, options, runtime_dependency);
        self.render(MANIFEST_TEMPLATE, &context)
    }
}

fn engine() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    hbs.register_escape_fn(handlebars::no_escape);
    hbs
}

/// Render driver source with the embedded template and default options
///
/// Deterministic: the same declaration always yields byte-identical text.
pub fn render(declaration: &Declaration) -> Result<String> {
    Renderer::embedded_only().render_driver(declaration, &DriverOptions::default())
}
