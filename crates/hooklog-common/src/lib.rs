//! Shared code for the hooklog hook handlers
//!
//! Each hook is a short-lived process the host starts at a session lifecycle
//! point. It reads one JSON object from stdin, records it under the log
//! directory, and always exits 0.
//!
//! - `HookPayload`: the loosely-typed event from the host
//! - `SessionLog`: append-only NDJSON store (session complete)
//! - `PromptLog`: rewritten JSON array store (user prompt submit)
//! - `run_fail_open`: top-level wrapper that turns every failure into success

mod banner;
mod config;
mod error;
mod payload;
mod prompt_log;
mod session_log;

pub mod cli;
pub mod diagnostics;
pub mod env;
pub mod runner;
pub mod time;

pub use banner::*;
pub use config::*;
pub use error::*;
pub use payload::*;
pub use prompt_log::*;
pub use session_log::*;
