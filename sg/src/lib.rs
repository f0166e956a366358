//! sweepgen - parameter sweep driver generator
//!
//! Turns an ordered list of parameter names into the source of a standalone
//! driver for one sweep point. The driver validates `--output_dir` and one
//! required double per parameter, reports the values and hands off to an
//! external simulation runtime through a `sweeprun::Lifecycle` adapter.
//!
//! # Modules
//!
//! - [`render`] - Handlebars templates and the renderer
//! - [`input`] - Declaration loading from flags and files
//! - [`scaffold`] - Standalone driver package generation
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod input;
pub mod render;
pub mod scaffold;

pub use config::{Config, DriverConfig};
pub use input::load_declaration;
pub use render::{DriverOptions, Renderer, render};
pub use scaffold::{ScaffoldError, ScaffoldRequest, Scaffolded, scaffold};
pub use sweeprun::{Declaration, DeclarationError, Parameter};
