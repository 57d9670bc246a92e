//! Where the hooks write their logs.
//!
//! Defaults to `logs/` under the working directory the host starts the hook
//! in. `HOOKLOG_DIR` overrides it.

use crate::{PromptLog, SessionLog};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the log directory.
pub const LOG_DIR_ENV: &str = "HOOKLOG_DIR";

/// Default log directory, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub log_dir: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl LogConfig {
    /// Build from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. An empty value counts as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(LOG_DIR_ENV) {
            Some(dir) if !dir.trim().is_empty() => Self {
                log_dir: PathBuf::from(dir),
            },
            _ => Self::default(),
        }
    }

    pub fn with_log_dir(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
        }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn session_log(&self) -> SessionLog {
        SessionLog::new(&self.log_dir)
    }

    pub fn prompt_log(&self) -> PromptLog {
        PromptLog::new(&self.log_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_relative_logs_dir() {
        let config = LogConfig::default();
        assert_eq!(config.log_dir(), Path::new("logs"));
        assert_eq!(
            config.session_log().path(),
            Path::new("logs/session_complete.json")
        );
        assert_eq!(
            config.prompt_log().path(),
            Path::new("logs/user_prompt_submit.json")
        );
    }

    #[test]
    fn lookup_overrides_log_dir() {
        let config = LogConfig::from_lookup(|key| {
            assert_eq!(key, "HOOKLOG_DIR");
            Some("/var/log/hooks".to_string())
        });
        assert_eq!(config.log_dir(), Path::new("/var/log/hooks"));
    }

    #[test]
    fn unset_lookup_uses_default() {
        let config = LogConfig::from_lookup(|_| None);
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn blank_lookup_uses_default() {
        let config = LogConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, LogConfig::default());
    }
}
