//! Driver Template System
//!
//! Renders driver source (and the manifest of a standalone driver package)
//! from a parameter declaration.
//!
//! Template loading chain:
//! 1. `{template-dir}/{name}.hbs` (user override from config)
//! 2. Embedded fallback in code
//!
//! Templates use Handlebars syntax. Every declaration-dependent fragment of the
//! driver comes from one of four `{{#each parameters}}` blocks: schema entry,
//! presence check, value extraction and report line.

pub mod embedded;
mod context;
mod loader;

pub use context::{DEFAULT_LIFECYCLE, DEFAULT_PROGRAM, DriverContext, DriverOptions, ManifestContext};
pub use loader::{DRIVER_TEMPLATE, MANIFEST_TEMPLATE, Renderer, render};
