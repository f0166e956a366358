//! sweepgen configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::{DEFAULT_LIFECYCLE, DEFAULT_PROGRAM, DriverOptions};

/// Main sweepgen configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Directory with `{name}.hbs` templates that replace the embedded ones
    #[serde(rename = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Settings baked into generated drivers
    pub driver: DriverConfig,
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// 1. Explicit path (errors are fatal)
    /// 2. `./.sweepgen.yml`
    /// 3. `~/.config/sweepgen/sweepgen.yml`
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for candidate in Self::default_locations() {
            if candidate.exists() {
                match Self::load_from_file(&candidate) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", candidate.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, before logging is set up
    ///
    /// Any failure yields `None`; the full load reports it later.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let path = match config_path {
            Some(path) => Some(path.clone()),
            None => Self::default_locations().into_iter().find(|p| p.exists()),
        }?;
        let content = fs::read_to_string(path).ok()?;
        serde_yaml::from_str::<Self>(&content).ok()?.log_level
    }

    fn default_locations() -> Vec<PathBuf> {
        let mut locations = vec![PathBuf::from(".sweepgen.yml")];
        if let Some(config_dir) = dirs::config_dir() {
            locations.push(config_dir.join("sweepgen").join("sweepgen.yml"));
        }
        locations
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Driver rendering options, with an optional program-name override
    pub fn driver_options(&self, program: Option<&str>) -> DriverOptions {
        DriverOptions {
            program: program.unwrap_or(self.driver.program.as_str()).to_string(),
            lifecycle: self.driver.lifecycle.clone(),
        }
    }
}

/// Settings baked into generated drivers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Program name shown in the driver's usage text
    pub program: String,

    /// Rust expression constructing the lifecycle adapter
    pub lifecycle: String,

    /// Dependency line for `sweeprun` in scaffolded manifests
    #[serde(rename = "runtime-dependency")]
    pub runtime_dependency: String,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            lifecycle: DEFAULT_LIFECYCLE.to_string(),
            runtime_dependency: format!("sweeprun = \"{}\"", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.log_level.is_none());
        assert!(config.template_dir.is_none());
        assert_eq!(config.driver.program, "sweep-driver");
        assert_eq!(config.driver.lifecycle, DEFAULT_LIFECYCLE);
        assert!(config.driver.runtime_dependency.starts_with("sweeprun = "));
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
log-level: debug
template-dir: /opt/sweep/templates
driver:
  program: cell-sweep
  lifecycle: "chaste_rt::Petsc::default()"
  runtime-dependency: 'sweeprun = { path = "../sr" }'
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.template_dir, Some(PathBuf::from("/opt/sweep/templates")));
        assert_eq!(config.driver.program, "cell-sweep");
        assert_eq!(config.driver.lifecycle, "chaste_rt::Petsc::default()");
        assert_eq!(config.driver.runtime_dependency, "sweeprun = { path = \"../sr\" }");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
driver:
  program: cell-sweep
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.driver.program, "cell-sweep");
        assert_eq!(config.driver.lifecycle, DEFAULT_LIFECYCLE);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_driver_options_override() {
        let config = Config::default();
        assert_eq!(config.driver_options(None).program, "sweep-driver");
        assert_eq!(config.driver_options(Some("other")).program, "other");
        assert_eq!(config.driver_options(None).lifecycle, DEFAULT_LIFECYCLE);
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweepgen.yml");
        fs::write(&path, "log-level: warn\ndriver:\n  program: x\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.driver.program, "x");
        assert_eq!(Config::load_log_level(Some(&path)).as_deref(), Some("warn"));
    }

    #[test]
    fn test_load_explicit_missing_path_fails() {
        let path = PathBuf::from("/nonexistent/sweepgen.yml");
        assert!(Config::load(Some(&path)).is_err());
        assert!(Config::load_log_level(Some(&path)).is_none());
    }
}
