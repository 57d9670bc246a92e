//! Argument parsing that never fails a hook.
//!
//! The host decides what arguments a hook gets. An argument we do not know
//! about is dropped and parsing retried, so the flags we do know still count
//! wherever they appear.

use clap::Parser;
use clap::error::{ContextKind, ContextValue};
use std::ffi::OsString;
use std::process::ExitCode;
use tracing::debug;

/// Parse the process arguments leniently. See [`parse_lenient_from`].
pub fn parse_lenient<P: Parser + Default>() -> Result<P, ExitCode> {
    parse_lenient_from(std::env::args_os())
}

/// Parse `args` (including the binary name), dropping unrecognised arguments.
///
/// `--help` and `--version` print and return `Err(ExitCode::SUCCESS)`. If an
/// error cannot be pinned on a single argument, defaults are used.
pub fn parse_lenient_from<P, I, T>(args: I) -> Result<P, ExitCode>
where
    P: Parser + Default,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    loop {
        let e = match P::try_parse_from(&args) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => e,
        };
        if !e.use_stderr() {
            let _ = e.print();
            return Err(ExitCode::SUCCESS);
        }

        let Some(ContextValue::String(offending)) = e.get(ContextKind::InvalidArg) else {
            debug!("unusable arguments, using defaults: {e}");
            return Ok(P::default());
        };
        let Some(pos) = args
            .iter()
            .skip(1)
            .position(|arg| arg.to_str() == Some(offending.as_str()))
        else {
            debug!("cannot drop {offending:?}, using defaults");
            return Ok(P::default());
        };
        debug!("ignoring argument {offending:?}");
        args.remove(pos + 1);
    }
}
