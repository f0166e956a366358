//! Parsed option values for one invocation

use std::collections::{BTreeMap, BTreeSet};

use crate::declaration::HELP;
use crate::error::{DriverError, Result};

/// Raw option values as they appeared on the command line
///
/// Built once by [`crate::OptionSchema::parse`] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOptions {
    present: BTreeSet<String>,
    values: BTreeMap<String, String>,
}

impl ParsedOptions {
    pub(crate) fn new(present: BTreeSet<String>, values: BTreeMap<String, String>) -> Self {
        Self { present, values }
    }

    /// Was `--help` given?
    pub fn help(&self) -> bool {
        self.is_present(HELP)
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.present.contains(name)
    }

    /// Raw text supplied for a valued option
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Extract a string option
    pub fn string(&self, name: &str) -> Result<String> {
        self.value(name)
            .map(str::to_string)
            .ok_or_else(|| DriverError::MissingValue { name: name.to_string() })
    }

    /// Extract a double option, converting its text
    ///
    /// Malformed text is a runtime error, never a usage error.
    pub fn double(&self, name: &str) -> Result<f64> {
        let value = self
            .value(name)
            .ok_or_else(|| DriverError::MissingValue { name: name.to_string() })?;
        value.trim().parse::<f64>().map_err(|source| DriverError::InvalidDouble {
            name: name.to_string(),
            value: value.to_string(),
            source,
        })
    }
}
