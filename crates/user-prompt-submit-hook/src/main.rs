//! User Prompt Submit Hook
//!
//! Invoked by the host each time the user submits a prompt.
//! Reads JSON from stdin and appends the whole payload to the array in
//! `logs/user_prompt_submit.json`. Prints nothing, always exits 0.

use clap::Parser;
use hooklog_common::cli::parse_lenient;
use hooklog_common::diagnostics::init_tracing;
use hooklog_common::env::load_env_file;
use hooklog_common::runner::{install_quiet_panic_hook, read_stdin, run_fail_open};
use hooklog_common::{HookError, HookPayload, LogConfig};
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser, Debug, Default)]
#[command(name = "user-prompt-submit-hook", version, about = "Log a submitted prompt")]
struct Cli {
    /// Only log prompts, no validation or blocking
    #[arg(long)]
    log_only: bool,

    /// Print diagnostics to stderr (-v warn, -vv info, -vvv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Append the submitted prompt payload to the prompt log. Returns the new
/// number of logged prompts.
///
/// `log_only` is accepted for future gating and does not change behavior.
pub fn process_user_prompt(
    input: &str,
    config: &LogConfig,
    log_only: bool,
) -> Result<usize, HookError> {
    let payload = HookPayload::parse(input)?;
    debug!(
        session_id = payload.session_id(),
        prompt_chars = payload.prompt().chars().count(),
        log_only,
        "prompt received"
    );

    let log = config.prompt_log();
    let count = log.append(payload.into_value())?;
    info!(count, path = %log.path().display(), "prompt logged");
    Ok(count)
}

fn main() -> ExitCode {
    // Before tracing so `.env` can carry HOOKLOG_LOG as well as HOOKLOG_DIR.
    load_env_file();
    let cli: Cli = match parse_lenient() {
        Ok(cli) => cli,
        Err(code) => return code,
    };
    init_tracing(cli.verbose);
    install_quiet_panic_hook();

    run_fail_open("user_prompt_submit", || {
        let input = read_stdin()?;
        let config = LogConfig::from_env();
        process_user_prompt(&input, &config, cli.log_only)?;
        Ok(())
    })
}
