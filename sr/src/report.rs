//! User-facing driver output
//!
//! Generated drivers call these writers from their per-parameter blocks so the
//! wording stays identical across every rendered driver.

use std::io::Write;

use crate::schema::OptionSchema;

/// Print the full option description (the `--help` path)
pub fn usage(out: &mut dyn Write, schema: &OptionSchema) -> std::io::Result<()> {
    writeln!(out, "{}", schema.describe())
}

pub fn missing_output_dir(out: &mut dyn Write, schema: &OptionSchema) -> std::io::Result<()> {
    writeln!(out, "output_dir was not set.")?;
    usage(out, schema)
}

/// Name exactly one missing parameter, then the option description
pub fn missing_parameter(out: &mut dyn Write, schema: &OptionSchema, name: &str) -> std::io::Result<()> {
    writeln!(out, "Parameter {} was not set.", name)?;
    usage(out, schema)
}

pub fn output_dir(out: &mut dyn Write, dir: &str) -> std::io::Result<()> {
    writeln!(out, "Output will be saved to {}", dir)
}

/// One report line per parameter, fixed-point with six decimals
pub fn parameter(out: &mut dyn Write, name: &str, value: f64) -> std::io::Result<()> {
    writeln!(out, "{}: {:.6}", name, value)
}
