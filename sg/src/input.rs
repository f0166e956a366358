//! Declaration input
//!
//! Parameter names come from `--param` values and/or a YAML or JSON file. The
//! file holds either a plain list of names or a map with a `parameters` list.

use std::path::Path;

use eyre::{Context, Result};
use serde::Deserialize;
use sweeprun::Declaration;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DeclarationFile {
    List(Vec<String>),
    Map { parameters: Vec<String> },
}

impl DeclarationFile {
    fn into_names(self) -> Vec<String> {
        match self {
            Self::List(names) | Self::Map { parameters: names } => names,
        }
    }
}

/// Read parameter names from a declaration file
pub fn read_names(path: &Path) -> Result<Vec<String>> {
    debug!(?path, "read_names: called");
    let content =
        std::fs::read_to_string(path).context(format!("Failed to read declaration file {}", path.display()))?;
    let file: DeclarationFile =
        serde_yaml::from_str(&content).context(format!("Failed to parse declaration file {}", path.display()))?;
    Ok(file.into_names())
}

/// Build a declaration from file names (first) followed by command-line names
pub fn load_declaration(params: &[String], params_file: Option<&Path>) -> Result<Declaration> {
    let mut names = match params_file {
        Some(path) => read_names(path)?,
        None => Vec::new(),
    };
    names.extend(params.iter().cloned());
    debug!(count = names.len(), "load_declaration: collected names");

    Declaration::new(names).context("Invalid parameter declaration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeprun::DeclarationError;

    fn write(content: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn test_params_only() {
        let decl = load_declaration(&["alpha".to_string(), "beta".to_string()], None).unwrap();
        assert_eq!(decl.names().collect::<Vec<_>>(), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_yaml_list_file() {
        let file = write("- alpha\n- beta\n");
        let decl = load_declaration(&[], Some(file.path())).unwrap();
        assert_eq!(decl.names().collect::<Vec<_>>(), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_json_map_file_then_params() {
        let file = write(r#"{"parameters": ["alpha", "beta"]}"#);
        let decl = load_declaration(&["gamma".to_string()], Some(file.path())).unwrap();
        assert_eq!(decl.names().collect::<Vec<_>>(), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_duplicate_across_sources_rejected() {
        let file = write("[alpha]");
        let err = load_declaration(&["alpha".to_string()], Some(file.path())).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DeclarationError>(),
            Some(&DeclarationError::Duplicate { name: "alpha".into() })
        );
    }

    #[test]
    fn test_malformed_file() {
        let file = write("parameters: 3");
        let err = load_declaration(&[], Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse declaration file"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_declaration(&[], Some(Path::new("/nonexistent/params.yml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read declaration file"));
    }
}
