//! Lifecycle adapter and guarded execution
//!
//! The external runtime a driver hands off to owns process-wide state. Drivers
//! acquire it through a [`Session`], which runs the adapter's shutdown hook from
//! `Drop`: exactly once, on success, on usage errors, on runtime errors and
//! while unwinding from a panic.

use std::io::Write;

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::status::{ExitCodes, Status};

/// Hooks supplied by the runtime a driver runs under
pub trait Lifecycle {
    /// Called once, before any argument parsing
    fn startup(&mut self) -> eyre::Result<()>;

    /// Called exactly once before the process exits
    fn shutdown(&mut self);

    /// Sink for runtime errors caught at the top level
    fn report_error(&mut self, message: &str);

    /// Success and runtime-error codes owned by this adapter
    fn exit_codes(&self) -> ExitCodes {
        ExitCodes::default()
    }
}

impl<L: Lifecycle + ?Sized> Lifecycle for &mut L {
    fn startup(&mut self) -> eyre::Result<()> {
        (**self).startup()
    }

    fn shutdown(&mut self) {
        (**self).shutdown()
    }

    fn report_error(&mut self, message: &str) {
        (**self).report_error(message)
    }

    fn exit_codes(&self) -> ExitCodes {
        (**self).exit_codes()
    }
}

/// Acquired runtime; released on drop
pub struct Session<L: Lifecycle> {
    lifecycle: L,
}

impl<L: Lifecycle> Session<L> {
    /// Take ownership of the adapter without running any hook yet
    ///
    /// From here on the shutdown hook is guaranteed to run, whether or not
    /// [`Session::start`] succeeds.
    pub fn new(lifecycle: L) -> Self {
        Self { lifecycle }
    }

    /// Run the startup hook
    pub fn start(&mut self) -> eyre::Result<()> {
        debug!("Session::start: called");
        self.lifecycle.startup()
    }

    pub fn report_error(&mut self, message: &str) {
        self.lifecycle.report_error(message)
    }

    pub fn exit_codes(&self) -> ExitCodes {
        self.lifecycle.exit_codes()
    }
}

impl<L: Lifecycle> Drop for Session<L> {
    fn drop(&mut self) {
        debug!("Session::drop: running shutdown hook");
        self.lifecycle.shutdown();
    }
}

/// Run a driver body between the lifecycle hooks and return its exit code
///
/// Any error from startup or from `body` goes to the adapter's error hook and
/// becomes [`Status::RuntimeError`]. The session is released before this
/// function returns.
pub fn execute<L, F>(lifecycle: L, out: &mut dyn Write, body: F) -> u8
where
    L: Lifecycle,
    F: FnOnce(&mut dyn Write) -> eyre::Result<Status>,
{
    let mut session = Session::new(lifecycle);
    let codes = session.exit_codes();

    let outcome = session.start().and_then(|()| body(&mut *out));
    let status = match outcome {
        Ok(status) => status,
        Err(err) => {
            session.report_error(&format!("{:#}", err));
            Status::RuntimeError
        }
    };

    if let Err(e) = out.flush() {
        warn!(error = %e, "execute: failed to flush driver output");
    }
    drop(session);

    debug!(?status, "execute: finished");
    status.code(&codes)
}

/// Default adapter for drivers with no external runtime of their own
///
/// Startup installs a stderr `tracing` subscriber filtered by `RUST_LOG`
/// (unless one is already installed); errors go to stderr prefixed `Error:`.
#[derive(Debug, Clone, Default)]
pub struct StandardLifecycle {
    codes: ExitCodes,
}

impl StandardLifecycle {
    pub fn with_exit_codes(codes: ExitCodes) -> Self {
        Self { codes }
    }
}

impl Lifecycle for StandardLifecycle {
    fn startup(&mut self) -> eyre::Result<()> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        if tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(filter)
            .try_init()
            .is_err()
        {
            debug!("StandardLifecycle::startup: subscriber already installed");
        }
        info!("Driver runtime started");
        Ok(())
    }

    fn shutdown(&mut self) {
        if let Err(e) = std::io::stdout().flush() {
            warn!(error = %e, "StandardLifecycle::shutdown: failed to flush stdout");
        }
        info!("Driver runtime shut down");
    }

    fn report_error(&mut self, message: &str) {
        debug!(%message, "StandardLifecycle::report_error: called");
        eprintln!("Error: {}", message);
    }

    fn exit_codes(&self) -> ExitCodes {
        self.codes
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Hook, RecordingLifecycle};
    use super::*;
    use eyre::eyre;

    #[test]
    fn test_success_runs_hooks_in_order() {
        let mut lifecycle = RecordingLifecycle::default();
        let mut out = Vec::new();

        let code = execute(&mut lifecycle, &mut out, |out| {
            writeln!(out, "hello")?;
            Ok(Status::Success)
        });

        assert_eq!(code, 0);
        assert_eq!(lifecycle.calls, vec![Hook::Startup, Hook::Shutdown]);
        assert_eq!(String::from_utf8(out).unwrap(), "hello\n");
    }

    #[test]
    fn test_usage_error_still_shuts_down() {
        let mut lifecycle = RecordingLifecycle::default();
        let code = execute(&mut lifecycle, &mut Vec::new(), |_| Ok(Status::UsageError));

        assert_eq!(code, 1);
        assert_eq!(lifecycle.shutdowns(), 1);
        assert!(lifecycle.errors().is_empty());
    }

    #[test]
    fn test_error_is_reported_and_mapped() {
        let mut lifecycle = RecordingLifecycle {
            codes: ExitCodes {
                success: 0,
                runtime_error: 9,
            },
            ..Default::default()
        };
        let code = execute(&mut lifecycle, &mut Vec::new(), |_| Err(eyre!("bad value")));

        assert_eq!(code, 9);
        assert_eq!(lifecycle.errors(), vec!["bad value"]);
        assert_eq!(lifecycle.calls.last(), Some(&Hook::Shutdown));
        assert_eq!(lifecycle.shutdowns(), 1);
    }

    #[test]
    fn test_failed_startup_skips_body_and_shuts_down() {
        let mut lifecycle = RecordingLifecycle {
            fail_startup: true,
            ..Default::default()
        };
        let mut ran = false;
        let code = execute(&mut lifecycle, &mut Vec::new(), |_| {
            ran = true;
            Ok(Status::Success)
        });

        assert!(!ran);
        assert_eq!(code, 2);
        assert_eq!(
            lifecycle.calls,
            vec![
                Hook::Startup,
                Hook::Error("runtime unavailable".to_string()),
                Hook::Shutdown
            ]
        );
    }

    #[test]
    fn test_panic_in_body_still_shuts_down() {
        let mut lifecycle = RecordingLifecycle::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            execute(&mut lifecycle, &mut Vec::new(), |_| panic!("simulation blew up"))
        }));

        assert!(result.is_err());
        assert_eq!(lifecycle.shutdowns(), 1);
    }

    #[test]
    fn test_session_releases_once() {
        let mut lifecycle = RecordingLifecycle::default();
        {
            let mut session = Session::new(&mut lifecycle);
            session.start().unwrap();
            session.report_error("oops");
        }
        assert_eq!(
            lifecycle.calls,
            vec![Hook::Startup, Hook::Error("oops".to_string()), Hook::Shutdown]
        );
    }

    #[test]
    fn test_standard_lifecycle_codes() {
        assert_eq!(StandardLifecycle::default().exit_codes(), ExitCodes::default());
        let codes = ExitCodes {
            success: 0,
            runtime_error: 70,
        };
        assert_eq!(StandardLifecycle::with_exit_codes(codes).exit_codes(), codes);
    }
}
