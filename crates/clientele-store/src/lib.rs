//! Clientele Store - JSON persistence and configuration
//!
//! Provides:
//! - JSON files for the address book, policy book and task list, with
//!   validation of every record on load
//! - User prefs (JSON) naming where those files live
//! - Application config (TOML)
//! - Atomic writes so a crash never leaves a half-written file

pub mod atomic;
pub mod config;
pub mod errors;
pub mod json;
pub mod prefs;
pub mod storage;

// Re-export key types
pub use config::Config;
pub use errors::Result;
pub use storage::{JsonStorage, Storage};
