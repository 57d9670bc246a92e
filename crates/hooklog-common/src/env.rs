//! Optional `.env` loading.
//!
//! The prompt hook tries to load `./.env` before doing anything else. The
//! file is entirely optional: a missing or unparseable file leaves the
//! environment untouched and the hook carries on.

use std::path::{Path, PathBuf};
use tracing::debug;

/// What happened when looking for an env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFile {
    Loaded(PathBuf),
    Absent,
    Invalid(String),
}

/// Load `.env` from the working directory (or a parent), if there is one.
///
/// Variables already set in the process environment win over the file.
pub fn load_env_file() -> EnvFile {
    classify(dotenvy::dotenv())
}

/// Load a specific env file.
pub fn load_env_file_from(path: &Path) -> EnvFile {
    classify(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn classify(result: dotenvy::Result<PathBuf>) -> EnvFile {
    match result {
        Ok(path) => {
            debug!("loaded env file {}", path.display());
            EnvFile::Loaded(path)
        }
        Err(e) if e.not_found() => EnvFile::Absent,
        Err(e) => {
            debug!("ignoring env file: {e}");
            EnvFile::Invalid(e.to_string())
        }
    }
}
