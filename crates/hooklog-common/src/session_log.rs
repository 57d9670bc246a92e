//! Append-only NDJSON log written by the session complete hook

use crate::HookError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the session complete log inside the log directory.
pub const SESSION_LOG_FILE: &str = "session_complete.json";

/// Event tag stored on every session complete entry.
pub const SESSION_COMPLETE_EVENT: &str = "session_complete_hook";

/// One line of the session complete log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCompleteEntry {
    pub timestamp: String,
    pub session_id: String,
    pub event: String,
    pub payload: Value,
}

impl SessionCompleteEntry {
    pub fn new(timestamp: String, session_id: impl Into<String>, payload: Value) -> Self {
        Self {
            timestamp,
            session_id: session_id.into(),
            event: SESSION_COMPLETE_EVENT.to_string(),
            payload,
        }
    }
}

/// Newline-delimited JSON log, opened in append mode for every write.
///
/// Existing lines are never touched. Overlapping writers are only as safe as
/// the filesystem's append-mode guarantees, since each entry goes out in a
/// single `write_all`.
#[derive(Debug, Clone)]
pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(SESSION_LOG_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one compact JSON line, creating the directory and file as needed.
    pub fn append(&self, entry: &SessionCompleteEntry) -> Result<(), HookError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| HookError::io(parent, e))?;
        }

        let mut line = serde_json::to_string(entry).map_err(HookError::Serialize)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| HookError::io(&self.path, e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| HookError::io(&self.path, e))?;
        Ok(())
    }

    /// Read every entry back. Blank lines are skipped; a malformed line is an error.
    pub fn read_entries(&self) -> Result<Vec<SessionCompleteEntry>, HookError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(HookError::io(&self.path, e)),
        };

        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(HookError::Parse))
            .collect()
    }
}
