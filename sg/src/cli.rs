//! CLI command definitions and subcommands

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// sweepgen - parameter sweep driver generator
#[derive(Parser)]
#[command(
    name = "sg",
    about = "Generate command-line drivers for single parameter sweep points",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Where the parameter declaration comes from
#[derive(Debug, Clone, Args)]
pub struct DeclarationArgs {
    /// Parameter name (repeat, or separate with commas)
    #[arg(short, long = "param", value_name = "NAME", value_delimiter = ',')]
    pub params: Vec<String>,

    /// YAML or JSON file listing parameter names
    #[arg(short = 'f', long, value_name = "FILE")]
    pub params_file: Option<PathBuf>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render driver source for a declaration
    Generate {
        #[command(flatten)]
        declaration: DeclarationArgs,

        /// Write the source here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Program name shown in the driver's usage text
        #[arg(long)]
        program: Option<String>,

        /// Do not echo the source after writing it to a file
        #[arg(short, long)]
        quiet: bool,
    },

    /// Scaffold a standalone driver package
    Init {
        /// Package directory
        dir: PathBuf,

        #[command(flatten)]
        declaration: DeclarationArgs,

        /// Package name (default: directory name)
        #[arg(long)]
        name: Option<String>,

        /// Program name shown in the driver's usage text
        #[arg(long)]
        program: Option<String>,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Print the option schema a driver would accept
    Schema {
        #[command(flatten)]
        declaration: DeclarationArgs,

        /// Emit the schema entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the driver contract directly (arguments after `--` go to the driver)
    Run {
        #[command(flatten)]
        declaration: DeclarationArgs,

        /// Program name shown in the driver's usage text
        #[arg(long)]
        program: Option<String>,

        /// Driver arguments, e.g. `-- --output_dir out --alpha 1.5`
        #[arg(last = true, value_name = "DRIVER_ARGS")]
        args: Vec<String>,
    },
}
