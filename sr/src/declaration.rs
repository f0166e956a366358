//! Parameter declarations
//!
//! A declaration is the ordered list of sweep parameters a driver accepts. Every
//! name becomes both a `--name` option and a local binding in generated source,
//! so names are restricted to lowercase identifiers that are neither Rust
//! keywords nor names the driver skeleton already uses.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Option names every driver defines before any parameter
pub const HELP: &str = "help";
pub const OUTPUT_DIR: &str = "output_dir";

/// Names taken by the driver skeleton itself
pub const RESERVED_NAMES: &[&str] = &[HELP, OUTPUT_DIR, "out", "options", "schema"];

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate", "do", "dyn", "else",
    "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "macro", "match", "mod",
    "move", "mut", "override", "priv", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true",
    "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Reasons a declaration is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    #[error("Parameter name must not be empty")]
    EmptyName,

    #[error("Parameter name '{name}' must start with a lowercase letter or '_' and contain only [a-z0-9_]")]
    InvalidName { name: String },

    #[error("Parameter name '{name}' is a Rust keyword")]
    Keyword { name: String },

    #[error("Parameter name '{name}' is reserved by the driver")]
    Reserved { name: String },

    #[error("Parameter '{name}' is declared more than once")]
    Duplicate { name: String },
}

/// A single named double-valued sweep parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Parameter {
    name: String,
}

impl Parameter {
    /// Create a parameter, checking the name on its own
    pub fn new(name: impl Into<String>) -> Result<Self, DeclarationError> {
        let name = name.into();
        check_name(&name)?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<String> for Parameter {
    type Error = DeclarationError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<Parameter> for String {
    fn from(parameter: Parameter) -> Self {
        parameter.name
    }
}

fn check_name(name: &str) -> Result<(), DeclarationError> {
    let mut chars = name.chars();
    let first = chars.next().ok_or(DeclarationError::EmptyName)?;

    let valid_first = first.is_ascii_lowercase() || first == '_';
    let valid_rest = chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if !valid_first || !valid_rest || name == "_" {
        return Err(DeclarationError::InvalidName { name: name.to_string() });
    }

    if KEYWORDS.contains(&name) {
        return Err(DeclarationError::Keyword { name: name.to_string() });
    }

    if RESERVED_NAMES.contains(&name) {
        return Err(DeclarationError::Reserved { name: name.to_string() });
    }

    Ok(())
}

/// Ordered, name-unique list of parameters
///
/// Order is significant: it fixes both validation order and report order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Parameter>", into = "Vec<Parameter>")]
pub struct Declaration {
    parameters: Vec<Parameter>,
}

impl Declaration {
    /// Build a declaration from names, rejecting invalid or repeated ones
    pub fn new<I, S>(names: I) -> Result<Self, DeclarationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parameters = names
            .into_iter()
            .map(Parameter::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_parameters(parameters)
    }

    fn from_parameters(parameters: Vec<Parameter>) -> Result<Self, DeclarationError> {
        for (i, parameter) in parameters.iter().enumerate() {
            if parameters[..i].contains(parameter) {
                return Err(DeclarationError::Duplicate {
                    name: parameter.name.clone(),
                });
            }
        }
        debug!(count = parameters.len(), "Declaration::from_parameters: accepted");
        Ok(Self { parameters })
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(Parameter::name)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl TryFrom<Vec<Parameter>> for Declaration {
    type Error = DeclarationError;

    fn try_from(parameters: Vec<Parameter>) -> Result<Self, Self::Error> {
        Self::from_parameters(parameters)
    }
}

impl From<Declaration> for Vec<Parameter> {
    fn from(declaration: Declaration) -> Self {
        declaration.parameters
    }
}

impl<'a> IntoIterator for &'a Declaration {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_preserves_order() {
        let decl = Declaration::new(["gamma", "alpha", "beta"]).unwrap();
        let names: Vec<_> = decl.names().collect();
        assert_eq!(names, vec!["gamma", "alpha", "beta"]);
        assert_eq!(decl.len(), 3);
    }

    #[test]
    fn test_empty_declaration_is_valid() {
        let decl = Declaration::new(Vec::<String>::new()).unwrap();
        assert!(decl.is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = Declaration::new(["alpha", "beta", "alpha"]).unwrap_err();
        assert_eq!(err, DeclarationError::Duplicate { name: "alpha".into() });
    }

    #[test]
    fn test_invalid_names_rejected() {
        assert_eq!(Parameter::new("").unwrap_err(), DeclarationError::EmptyName);
        for name in ["1alpha", "Alpha", "al-pha", "al pha", "_", "α"] {
            assert!(
                matches!(Parameter::new(name), Err(DeclarationError::InvalidName { .. })),
                "{name} should be invalid"
            );
        }
    }

    #[test]
    fn test_keywords_and_reserved_rejected() {
        assert!(matches!(Parameter::new("fn"), Err(DeclarationError::Keyword { .. })));
        assert!(matches!(Parameter::new("gen"), Err(DeclarationError::Keyword { .. })));
        assert!(matches!(Parameter::new("output_dir"), Err(DeclarationError::Reserved { .. })));
        assert!(matches!(Parameter::new("help"), Err(DeclarationError::Reserved { .. })));
        assert!(matches!(Parameter::new("schema"), Err(DeclarationError::Reserved { .. })));
    }

    #[test]
    fn test_underscore_and_digits_allowed() {
        assert!(Parameter::new("_k2").is_ok());
        assert!(Parameter::new("cell_cycle_time").is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let decl: Declaration = serde_yaml::from_str("[alpha, beta]").unwrap();
        assert_eq!(decl.names().collect::<Vec<_>>(), vec!["alpha", "beta"]);

        assert!(serde_yaml::from_str::<Declaration>("[alpha, alpha]").is_err());
        assert!(serde_yaml::from_str::<Declaration>("[Alpha]").is_err());
    }

    #[test]
    fn test_serialize_as_plain_list() {
        let decl = Declaration::new(["alpha", "beta"]).unwrap();
        let yaml = serde_yaml::to_string(&decl).unwrap();
        assert_eq!(yaml, "- alpha\n- beta\n");
    }
}
