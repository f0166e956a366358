//! Fail-fast validation of parsed options
//!
//! The checks run in a fixed order: help, then output_dir, then each parameter
//! in declaration order. The first failing check ends validation; later
//! parameters are never looked at.

use tracing::debug;

use crate::declaration::OUTPUT_DIR;
use crate::options::ParsedOptions;
use crate::schema::OptionSchema;

/// Where validation stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// `--help` was given; nothing else was checked
    Help,
    MissingOutputDir,
    /// The first absent parameter in declaration order
    MissingParameter(String),
    /// output_dir and every parameter are present
    Ready,
}

pub fn validate(schema: &OptionSchema, options: &ParsedOptions) -> Validation {
    if options.help() {
        debug!("validate: help requested, skipping checks");
        return Validation::Help;
    }

    if !options.is_present(OUTPUT_DIR) {
        debug!("validate: output_dir missing");
        return Validation::MissingOutputDir;
    }

    for entry in schema.parameters() {
        if !options.is_present(&entry.name) {
            debug!(name = %entry.name, "validate: parameter missing");
            return Validation::MissingParameter(entry.name.clone());
        }
    }

    Validation::Ready
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> OptionSchema {
        OptionSchema::new("driver")
            .parameter("alpha")
            .parameter("beta")
            .parameter("gamma")
    }

    fn check(args: &[&str]) -> Validation {
        let schema = schema();
        let mut argv = vec!["driver"];
        argv.extend_from_slice(args);
        let options = schema.parse(argv).unwrap();
        validate(&schema, &options)
    }

    #[test]
    fn test_help_beats_everything() {
        assert_eq!(check(&["--help"]), Validation::Help);
        assert_eq!(check(&["--alpha", "1", "--help"]), Validation::Help);
        assert_eq!(check(&["--help", "--alpha", "junk"]), Validation::Help);
    }

    #[test]
    fn test_output_dir_checked_before_parameters() {
        assert_eq!(check(&[]), Validation::MissingOutputDir);
        assert_eq!(check(&["--alpha", "1"]), Validation::MissingOutputDir);
    }

    #[test]
    fn test_first_missing_parameter_reported() {
        assert_eq!(
            check(&["--output_dir", "o"]),
            Validation::MissingParameter("alpha".to_string())
        );
        assert_eq!(
            check(&["--output_dir", "o", "--alpha", "1"]),
            Validation::MissingParameter("beta".to_string())
        );
        assert_eq!(
            check(&["--output_dir", "o", "--alpha", "1", "--gamma", "3"]),
            Validation::MissingParameter("beta".to_string())
        );
        assert_eq!(
            check(&["--output_dir", "o", "--alpha", "1", "--beta", "2"]),
            Validation::MissingParameter("gamma".to_string())
        );
    }

    #[test]
    fn test_ready_when_all_present() {
        assert_eq!(
            check(&["--gamma", "3", "--beta", "2", "--alpha", "1", "--output_dir", "o"]),
            Validation::Ready
        );
    }

    #[test]
    fn test_values_are_not_inspected() {
        assert_eq!(
            check(&["--output_dir", "o", "--alpha", "x", "--beta", "y", "--gamma", "z"]),
            Validation::Ready
        );
    }
}
