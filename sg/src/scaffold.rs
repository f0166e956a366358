//! Driver package scaffolding
//!
//! Writes a standalone cargo package (`Cargo.toml` + `src/main.rs`) that builds
//! the rendered driver against `sweeprun`.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use sweeprun::Declaration;
use thiserror::Error;
use tracing::{debug, info};

use crate::render::{DriverOptions, Renderer};

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Refusing to overwrite {path} (use --force)")]
    AlreadyExists { path: PathBuf },

    #[error("Cannot derive a package name from {path}; pass --name")]
    NoPackageName { path: PathBuf },
}

/// What to scaffold and where
#[derive(Debug, Clone)]
pub struct ScaffoldRequest<'a> {
    pub root: &'a Path,
    /// Package name; defaults to the root directory's name
    pub package: Option<&'a str>,
    pub declaration: &'a Declaration,
    pub options: &'a DriverOptions,
    pub runtime_dependency: &'a str,
    pub force: bool,
}

/// Files written by a scaffold run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffolded {
    pub manifest: PathBuf,
    pub main: PathBuf,
}

pub fn scaffold(renderer: &Renderer, request: &ScaffoldRequest<'_>) -> Result<Scaffolded> {
    debug!(root = ?request.root, force = request.force, "scaffold: called");
    let package = match request.package {
        Some(name) => name.to_string(),
        None => request
            .root
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| ScaffoldError::NoPackageName {
                path: request.root.to_path_buf(),
            })?,
    };

    let manifest = request.root.join("Cargo.toml");
    let main = request.root.join("src").join("main.rs");
    if !request.force {
        for path in [&manifest, &main] {
            if path.exists() {
                return Err(ScaffoldError::AlreadyExists { path: path.clone() }.into());
            }
        }
    }

    let manifest_text =
        renderer.render_manifest(&package, request.declaration, request.options, request.runtime_dependency)?;
    let main_text = renderer.render_driver(request.declaration, request.options)?;

    let src_dir = request.root.join("src");
    std::fs::create_dir_all(&src_dir).context(format!("Failed to create {}", src_dir.display()))?;
    std::fs::write(&manifest, manifest_text).context(format!("Failed to write {}", manifest.display()))?;
    std::fs::write(&main, main_text).context(format!("Failed to write {}", main.display()))?;

    info!("Scaffolded driver package {} in {}", package, request.root.display());
    Ok(Scaffolded { manifest, main })
}
