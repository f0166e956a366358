//! Option schema
//!
//! The schema is the driver's table of accepted options: `help`, `output_dir`
//! and one double-valued entry per declared parameter, in that order. It lowers
//! to a clap `Command` for parsing and for the usage text, but clap never
//! enforces `required` itself; that ordering belongs to [`crate::validate`].

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;

use clap::{Arg, ArgAction, Command, value_parser};
use serde::Serialize;
use tracing::debug;

use crate::declaration::{Declaration, HELP, OUTPUT_DIR};
use crate::error::Result;
use crate::options::ParsedOptions;

/// Value shape of an option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Present or absent, never carries a value
    Flag,
    String,
    Double,
}

impl OptionKind {
    fn value_name(self) -> Option<&'static str> {
        match self {
            Self::Flag => None,
            Self::String => Some("PATH"),
            Self::Double => Some("VALUE"),
        }
    }
}

/// One row of the schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
    pub name: String,
    pub kind: OptionKind,
    pub required: bool,
    pub help: String,
}

/// Ordered option table for one driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSchema {
    program: String,
    entries: Vec<OptionEntry>,
}

impl OptionSchema {
    /// Schema holding only the fixed `help` and `output_dir` entries
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            entries: vec![
                OptionEntry {
                    name: HELP.to_string(),
                    kind: OptionKind::Flag,
                    required: false,
                    help: "Produce this help message".to_string(),
                },
                OptionEntry {
                    name: OUTPUT_DIR.to_string(),
                    kind: OptionKind::String,
                    required: true,
                    help: "Directory to write simulation outputs".to_string(),
                },
            ],
        }
    }

    /// Append a required double-valued parameter entry
    ///
    /// Names are taken as-is; generated drivers only pass names that already
    /// went through [`Declaration::new`].
    pub fn parameter(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let help = format!("Set the value of {}", name);
        self.entries.push(OptionEntry {
            name,
            kind: OptionKind::Double,
            required: true,
            help,
        });
        self
    }

    /// Schema for a declaration supplied at run time
    pub fn for_declaration(program: impl Into<String>, declaration: &Declaration) -> Self {
        declaration
            .names()
            .fold(Self::new(program), |schema, name| schema.parameter(name))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    pub fn entry(&self, name: &str) -> Option<&OptionEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Parameter entries only, in declaration order
    pub fn parameters(&self) -> impl Iterator<Item = &OptionEntry> {
        self.entries.iter().filter(|e| e.kind == OptionKind::Double)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lower the schema to a clap command
    pub fn command(&self) -> Command {
        let mut command = Command::new(self.program.clone())
            .disable_help_flag(true)
            .disable_version_flag(true);

        for entry in &self.entries {
            let arg = Arg::new(entry.name.clone())
                .long(entry.name.clone())
                .help(entry.help.clone());
            let arg = match entry.kind {
                OptionKind::Flag => arg.action(ArgAction::SetTrue),
                OptionKind::String => arg.action(ArgAction::Set).value_parser(value_parser!(String)),
                OptionKind::Double => arg
                    .action(ArgAction::Set)
                    .allow_negative_numbers(true)
                    .value_parser(value_parser!(String)),
            };
            let arg = match entry.kind.value_name() {
                Some(value_name) => arg.value_name(value_name),
                None => arg,
            };
            command = command.arg(arg);
        }

        command
    }

    /// Human-readable description of every option, printed on help and usage errors
    pub fn describe(&self) -> String {
        self.command().render_help().to_string()
    }

    /// Parse an argument vector (program name first) into raw option values
    ///
    /// Values stay as text; nothing is converted to a number here. `--help` only
    /// wins over other declared options: an unknown or valueless option is a parse
    /// error even when `--help` is present.
    pub fn parse<I, T>(&self, args: I) -> Result<ParsedOptions>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        debug!(program = %self.program, "OptionSchema::parse: called");
        let matches = self.command().try_get_matches_from(args)?;

        let mut present = BTreeSet::new();
        let mut values = BTreeMap::new();
        for entry in &self.entries {
            match entry.kind {
                OptionKind::Flag => {
                    if matches.get_flag(&entry.name) {
                        present.insert(entry.name.clone());
                    }
                }
                OptionKind::String | OptionKind::Double => {
                    if let Some(value) = matches.get_one::<String>(&entry.name) {
                        present.insert(entry.name.clone());
                        values.insert(entry.name.clone(), value.clone());
                    }
                }
            }
        }

        debug!(present = present.len(), "OptionSchema::parse: parsed");
        Ok(ParsedOptions::new(present, values))
    }
}
