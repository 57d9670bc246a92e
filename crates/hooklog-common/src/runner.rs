//! Fail-open wrapper around a hook's logic.
//!
//! A hook must never block or alarm the host. Whatever goes wrong (bad stdin,
//! a corrupt store, an unwritable directory, even a panic) ends in exit
//! status 0 and, at most, a line on stderr when diagnostics are enabled.

use crate::HookError;
use std::io::Read;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;
use tracing::{debug, error, warn};

/// Read all of stdin.
pub fn read_stdin() -> Result<String, HookError> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(HookError::Stdin)?;
    Ok(input)
}

/// Replace the default panic printer so a panic stays off the host's stderr
/// unless diagnostics are enabled.
pub fn install_quiet_panic_hook() {
    panic::set_hook(Box::new(|info| {
        error!("hook panicked: {info}");
    }));
}

/// How a hook run ended. Only ever reported, never surfaced to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Recorded,
    Ignored,
    Failed,
    Panicked,
}

/// Run `hook` and convert every outcome into a successful exit.
pub fn run_fail_open<F>(name: &str, hook: F) -> ExitCode
where
    F: FnOnce() -> Result<(), HookError>,
{
    let _ = run_catching(name, hook);
    ExitCode::SUCCESS
}

/// Run `hook`, catching both errors and panics.
pub fn run_catching<F>(name: &str, hook: F) -> Outcome
where
    F: FnOnce() -> Result<(), HookError>,
{
    match panic::catch_unwind(AssertUnwindSafe(hook)) {
        Ok(Ok(())) => {
            debug!("{name}: recorded");
            Outcome::Recorded
        }
        Ok(Err(e)) if e.is_malformed_input() => {
            debug!("{name}: ignoring input: {e}");
            Outcome::Ignored
        }
        Ok(Err(e)) => {
            warn!("{name}: nothing recorded: {e}");
            Outcome::Failed
        }
        Err(_) => {
            error!("{name}: aborted by panic, nothing recorded");
            Outcome::Panicked
        }
    }
}
