//! Interpreting driver
//!
//! Applies the generated-driver contract to a declaration supplied at run time:
//! the same schema, the same fail-fast checks and the same report lines, driven
//! by a loop over the declaration instead of rendered per-parameter blocks.

use std::ffi::OsString;
use std::io::Write;

use tracing::{debug, info};

use crate::declaration::{Declaration, OUTPUT_DIR};
use crate::error::Result;
use crate::lifecycle::{Lifecycle, execute};
use crate::report;
use crate::schema::OptionSchema;
use crate::status::Status;
use crate::validate::{Validation, validate};

/// Values for one sweep point, in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub output_dir: String,
    pub values: Vec<(String, f64)>,
}

impl SweepPoint {
    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    /// Output directory line, then one line per parameter
    pub fn report(&self, out: &mut dyn Write) -> std::io::Result<()> {
        report::output_dir(out, &self.output_dir)?;
        for (name, value) in &self.values {
            report::parameter(out, name, *value)?;
        }
        Ok(())
    }
}

/// Result of parsing and validating one argument vector
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Help,
    MissingOutputDir,
    MissingParameter(String),
    Ready(SweepPoint),
}

#[derive(Debug, Clone)]
pub struct Driver {
    schema: OptionSchema,
}

impl Driver {
    pub fn new(program: impl Into<String>, declaration: &Declaration) -> Self {
        Self {
            schema: OptionSchema::for_declaration(program, declaration),
        }
    }

    pub fn schema(&self) -> &OptionSchema {
        &self.schema
    }

    /// Parse and validate; extract values only once every check has passed
    pub fn evaluate<I, T>(&self, args: I) -> Result<Evaluation>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let options = self.schema.parse(args)?;

        match validate(&self.schema, &options) {
            Validation::Help => Ok(Evaluation::Help),
            Validation::MissingOutputDir => Ok(Evaluation::MissingOutputDir),
            Validation::MissingParameter(name) => Ok(Evaluation::MissingParameter(name)),
            Validation::Ready => {
                let output_dir = options.string(OUTPUT_DIR)?;
                let values = self
                    .schema
                    .parameters()
                    .map(|entry| Ok((entry.name.clone(), options.double(&entry.name)?)))
                    .collect::<Result<Vec<_>>>()?;
                debug!(count = values.len(), "Driver::evaluate: ready");
                Ok(Evaluation::Ready(SweepPoint { output_dir, values }))
            }
        }
    }

    /// Evaluate and write the user-facing output, returning the terminal status
    pub fn run<I, T>(&self, args: I, out: &mut dyn Write) -> Result<Status>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let status = match self.evaluate(args)? {
            Evaluation::Help => {
                report::usage(out, &self.schema)?;
                Status::Success
            }
            Evaluation::MissingOutputDir => {
                report::missing_output_dir(out, &self.schema)?;
                Status::UsageError
            }
            Evaluation::MissingParameter(name) => {
                report::missing_parameter(out, &self.schema, &name)?;
                Status::UsageError
            }
            Evaluation::Ready(point) => {
                info!(output_dir = %point.output_dir, "Driver::run: sweep point ready");
                point.report(out)?;
                Status::Success
            }
        };
        Ok(status)
    }

    /// Full driver invocation under a lifecycle adapter; returns the exit code
    pub fn execute<L, I, T>(&self, lifecycle: L, args: I, out: &mut dyn Write) -> u8
    where
        L: Lifecycle,
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        execute(lifecycle, out, |out| Ok(self.run(args, out)?))
    }
}
