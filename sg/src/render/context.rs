//! Template contexts

use serde::Serialize;
use sweeprun::Declaration;

/// Default binary name shown in a driver's usage text
pub const DEFAULT_PROGRAM: &str = "sweep-driver";

/// Adapter expression used when the configuration names none
pub const DEFAULT_LIFECYCLE: &str = "sweeprun::StandardLifecycle::default()";

/// Knobs for driver rendering that do not depend on the declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOptions {
    /// Program name in the driver's usage text
    pub program: String,
    /// Rust expression producing the `sweeprun::Lifecycle` the driver runs under
    pub lifecycle: String,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            lifecycle: DEFAULT_LIFECYCLE.to_string(),
        }
    }
}

/// Context for `driver.rs.hbs`
#[derive(Debug, Clone, Serialize)]
pub struct DriverContext {
    pub generator_version: String,
    pub program: String,
    pub lifecycle: String,
    pub parameters: Vec<String>,
    pub parameter_list: String,
}

impl DriverContext {
    pub fn new(declaration: &Declaration, options: &DriverOptions) -> Self {
        Self {
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            program: options.program.clone(),
            lifecycle: options.lifecycle.clone(),
            parameters: declaration.names().map(str::to_string).collect(),
            parameter_list: parameter_list(declaration),
        }
    }
}

/// Context for `Cargo.toml.hbs`
#[derive(Debug, Clone, Serialize)]
pub struct ManifestContext {
    pub package: String,
    pub program: String,
    pub parameter_list: String,
    pub runtime_dependency: String,
}

impl ManifestContext {
    pub fn new(package: &str, declaration: &Declaration, options: &DriverOptions, runtime_dependency: &str) -> Self {
        Self {
            package: package.to_string(),
            program: options.program.clone(),
            parameter_list: parameter_list(declaration),
            runtime_dependency: runtime_dependency.to_string(),
        }
    }
}

fn parameter_list(declaration: &Declaration) -> String {
    if declaration.is_empty() {
        "(no parameters)".to_string()
    } else {
        declaration.names().collect::<Vec<_>>().join(", ")
    }
}
