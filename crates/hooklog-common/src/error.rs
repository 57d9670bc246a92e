//! Error type shared by both hooks

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while handling a hook invocation.
///
/// None of these ever reach the host: `run_fail_open` converts them into a
/// successful exit.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
    #[error("failed to write stdout: {0}")]
    Stdout(#[source] std::io::Error),
    #[error("invalid hook payload: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("hook payload is not a JSON object")]
    NotAnObject,
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode log entry: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl HookError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by the host handing us something that is not a
    /// JSON object. These are expected and silently ignored.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::NotAnObject)
    }
}
