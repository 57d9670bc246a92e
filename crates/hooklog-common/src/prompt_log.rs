//! JSON array log rewritten by the user prompt submit hook

use crate::HookError;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the prompt log inside the log directory.
pub const PROMPT_LOG_FILE: &str = "user_prompt_submit.json";

/// A single JSON array of raw payloads, read and rewritten in full per call.
///
/// Not safe under concurrent invocation: two hooks that overlap both read
/// the same array, and whichever rename lands last drops the other's entry.
/// Each individual rewrite is atomic, so readers never see a partial array.
#[derive(Debug, Clone)]
pub struct PromptLog {
    path: PathBuf,
}

impl PromptLog {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(PROMPT_LOG_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored array.
    ///
    /// A missing file, invalid JSON, or JSON that is not an array all load as
    /// empty. Only real read failures (permissions, a directory in the way)
    /// are errors.
    pub fn load(&self) -> Result<Vec<Value>, HookError> {
        let contents = match fs::read(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(HookError::io(&self.path, e)),
        };

        match serde_json::from_slice::<Value>(&contents) {
            Ok(Value::Array(entries)) => Ok(entries),
            Ok(_) => {
                debug!("{} is not a JSON array, starting over", self.path.display());
                Ok(Vec::new())
            }
            Err(e) => {
                debug!("{} is corrupt ({e}), starting over", self.path.display());
                Ok(Vec::new())
            }
        }
    }

    /// Append `payload` to the array and rewrite the file. Returns the new length.
    pub fn append(&self, payload: Value) -> Result<usize, HookError> {
        let parent = self.parent()?;
        fs::create_dir_all(parent).map_err(|e| HookError::io(parent, e))?;

        let mut entries = self.load()?;
        entries.push(payload);

        let json = serde_json::to_string_pretty(&entries).map_err(HookError::Serialize)?;
        atomic_write(&self.path, json.as_bytes())?;
        Ok(entries.len())
    }

    fn parent(&self) -> Result<&Path, HookError> {
        self.path.parent().ok_or_else(|| {
            HookError::io(
                &self.path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no parent"),
            )
        })
    }
}

/// Write bytes to a file atomically: write to a temp file in the same
/// directory, then rename over the target.
fn atomic_write(path: &Path, data: &[u8]) -> Result<(), HookError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(|e| HookError::io(parent, e))?;
    tmp.write_all(data).map_err(|e| HookError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| HookError::io(path, e.error))?;
    Ok(())
}
