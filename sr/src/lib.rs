//! sweeprun - runtime support for generated sweep drivers
//!
//! A sweep driver runs a single point of a parameter sweep: it accepts
//! `--output_dir` plus one required double per declared parameter, validates
//! them fail-fast, reports their values and hands control to an external
//! simulation runtime. `sweepgen` renders the per-parameter code; this crate
//! carries everything that does not depend on the parameter list.
//!
//! # Modules
//!
//! - [`declaration`] - Parameter names and their validity rules
//! - [`schema`] - Option table and its clap lowering
//! - [`validate`] - Fail-fast check ordering
//! - [`report`] - User-facing output lines
//! - [`lifecycle`] - Runtime hooks and the guarded `execute` entry point
//! - [`driver`] - Interpreting driver for declarations known only at run time

pub mod declaration;
pub mod driver;
pub mod error;
pub mod lifecycle;
pub mod options;
pub mod report;
pub mod schema;
pub mod status;
pub mod validate;

// Re-exported for generated drivers
pub use eyre;

pub use declaration::{Declaration, DeclarationError, HELP, OUTPUT_DIR, Parameter, RESERVED_NAMES};
pub use driver::{Driver, Evaluation, SweepPoint};
pub use error::{DriverError, Result};
pub use lifecycle::{Lifecycle, Session, StandardLifecycle, execute};
pub use options::ParsedOptions;
pub use schema::{OptionEntry, OptionKind, OptionSchema};
pub use status::{ExitCodes, Status, USAGE_ERROR};
pub use validate::{Validation, validate};
