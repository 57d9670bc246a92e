//! Session Complete Hook
//!
//! Invoked by the host when a session finishes.
//! Reads JSON from stdin, appends one timestamped line to
//! `logs/session_complete.json`, prints a short banner, exits 0.

use clap::Parser;
use hooklog_common::cli::parse_lenient;
use hooklog_common::diagnostics::init_tracing;
use hooklog_common::runner::{install_quiet_panic_hook, read_stdin, run_fail_open};
use hooklog_common::time::local_timestamp;
use hooklog_common::{HookError, HookPayload, LogConfig, SessionBanner, SessionCompleteEntry};
use std::io::Write;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser, Debug, Default)]
#[command(name = "session-complete-hook", version, about = "Log a completed session")]
struct Cli {
    /// Print diagnostics to stderr (-v warn, -vv info, -vvv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Record a completed session and write the banner to `out`.
///
/// Nothing is written anywhere when `input` is not a JSON object.
pub fn process_session_complete(
    input: &str,
    config: &LogConfig,
    out: &mut impl Write,
) -> Result<SessionCompleteEntry, HookError> {
    let payload = HookPayload::parse(input)?;
    let timestamp = local_timestamp();
    let session_id = payload.session_id().to_string();

    let entry = SessionCompleteEntry::new(timestamp, session_id, payload.into_value());
    let log = config.session_log();
    log.append(&entry)?;
    info!(session_id = %entry.session_id, path = %log.path().display(), "session logged");

    let banner = SessionBanner {
        timestamp: &entry.timestamp,
        session_id: &entry.session_id,
    };
    write!(out, "{banner}")
        .and_then(|()| out.flush())
        .map_err(HookError::Stdout)?;

    Ok(entry)
}

fn main() -> ExitCode {
    let cli: Cli = match parse_lenient() {
        Ok(cli) => cli,
        Err(code) => return code,
    };
    init_tracing(cli.verbose);
    install_quiet_panic_hook();

    run_fail_open("session_complete", || {
        let input = read_stdin()?;
        let config = LogConfig::from_env();
        process_session_complete(&input, &config, &mut std::io::stdout().lock())?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hooklog_common::SESSION_COMPLETE_EVENT;
    use hooklog_common::cli::parse_lenient_from;
    use serde_json::json;

    fn temp_config() -> (tempfile::TempDir, LogConfig) {
        let tmp = tempfile::tempdir().unwrap();
        let config = LogConfig::with_log_dir(tmp.path().join("logs"));
        (tmp, config)
    }

    // ==================== Valid input tests ====================

    #[test]
    fn process_writes_entry_and_banner() {
        let (_tmp, config) = temp_config();
        let mut out = Vec::new();

        let entry = process_session_complete(
            r#"{"session_id": "3f2a9c1e-77b0-4d6e-a1f2", "cwd": "/tmp"}"#,
            &config,
            &mut out,
        )
        .unwrap();

        assert_eq!(entry.session_id, "3f2a9c1e-77b0-4d6e-a1f2");
        assert_eq!(entry.event, SESSION_COMPLETE_EVENT);
        assert_eq!(
            entry.payload,
            json!({"session_id": "3f2a9c1e-77b0-4d6e-a1f2", "cwd": "/tmp"})
        );

        let stored = config.session_log().read_entries().unwrap();
        assert_eq!(stored, vec![entry.clone()]);

        let banner = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "=== Claude School - Session Complete ===");
        assert_eq!(lines[1], format!("Timestamp: {}", entry.timestamp));
        assert_eq!(lines[2], "Session: 3f2a9c1e-77b0-4d...");
    }

    #[test]
    fn process_defaults_missing_session_id() {
        let (_tmp, config) = temp_config();
        let mut out = Vec::new();

        let entry = process_session_complete(r#"{"reason": "exit"}"#, &config, &mut out).unwrap();

        assert_eq!(entry.session_id, "unknown");
        assert!(String::from_utf8(out).unwrap().contains("Session: unknown...\n"));
    }

    #[test]
    fn process_appends_across_calls() {
        let (_tmp, config) = temp_config();

        for id in ["s1", "s2"] {
            let input = json!({"session_id": id}).to_string();
            process_session_complete(&input, &config, &mut Vec::new()).unwrap();
        }

        let ids: Vec<String> = config
            .session_log()
            .read_entries()
            .unwrap()
            .into_iter()
            .map(|e| e.session_id)
            .collect();
        assert_eq!(ids, vec!["s1", "s2"]);
    }

    // ==================== Invalid input tests ====================

    #[test]
    fn process_invalid_json_writes_nothing() {
        let (_tmp, config) = temp_config();
        let mut out = Vec::new();

        let err = process_session_complete("not valid json", &config, &mut out).unwrap_err();

        assert!(err.is_malformed_input());
        assert!(out.is_empty());
        assert!(!config.log_dir().exists());
    }

    #[test]
    fn process_non_object_writes_nothing() {
        let (_tmp, config) = temp_config();
        let mut out = Vec::new();

        let err = process_session_complete("[1, 2, 3]", &config, &mut out).unwrap_err();

        assert!(matches!(err, HookError::NotAnObject));
        assert!(out.is_empty());
        assert!(!config.log_dir().exists());
    }

    #[test]
    fn process_unwritable_log_dir_prints_no_banner() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("logs");
        std::fs::write(&blocker, "file in the way").unwrap();
        let config = LogConfig::with_log_dir(&blocker);
        let mut out = Vec::new();

        let err = process_session_complete(r#"{"session_id": "s1"}"#, &config, &mut out)
            .unwrap_err();

        assert!(matches!(err, HookError::Io { .. }));
        assert!(out.is_empty());
    }

    struct ClosedStdout;

    impl Write for ClosedStdout {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn process_closed_stdout_is_stdout_error_after_logging() {
        let (_tmp, config) = temp_config();

        let err = process_session_complete(r#"{"session_id": "s1"}"#, &config, &mut ClosedStdout)
            .unwrap_err();

        assert!(matches!(err, HookError::Stdout(_)));
        assert!(!err.is_malformed_input());
        assert_eq!(config.session_log().read_entries().unwrap().len(), 1);
    }

    // ==================== CLI tests ====================

    #[test]
    fn cli_no_args() {
        let cli = Cli::try_parse_from(["session-complete-hook"]).unwrap();
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_verbose_count() {
        let cli = Cli::try_parse_from(["session-complete-hook", "-vvv"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn cli_unknown_flag_keeps_verbosity() {
        let cli: Cli = parse_lenient_from(["session-complete-hook", "-vv", "--bogus"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_help_is_not_an_error() {
        let err = Cli::try_parse_from(["session-complete-hook", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }
}
