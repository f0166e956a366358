//! Exit status and exit codes
//!
//! - Success: code supplied by the lifecycle adapter (0 by default)
//! - UsageError: always 1
//! - RuntimeError: code supplied by the lifecycle adapter (2 by default)

/// Exit code for a missing required option. Fixed; not owned by any adapter.
pub const USAGE_ERROR: u8 = 1;

/// Terminal status of one driver invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    UsageError,
    RuntimeError,
}

impl Status {
    /// Map the status to a process exit code
    pub fn code(self, codes: &ExitCodes) -> u8 {
        match self {
            Self::Success => codes.success,
            Self::UsageError => USAGE_ERROR,
            Self::RuntimeError => codes.runtime_error,
        }
    }
}

/// Exit codes owned by a lifecycle adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCodes {
    pub success: u8,
    pub runtime_error: u8,
}

impl Default for ExitCodes {
    fn default() -> Self {
        Self {
            success: 0,
            runtime_error: 2,
        }
    }
}
