//! Application config (`config.toml`)
//!
//! ```toml
//! user_prefs_path = "preferences.json"
//! log_profile = "quiet"
//! ```
//!
//! Relative paths are resolved against the base directory, which is the
//! `--data-dir` flag if given, else `$CLIENTELE_HOME`, else the current
//! directory.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clientele_core::logging_facility::Profile;
use serde::{Deserialize, Serialize};

use crate::atomic::atomic_write;
use crate::errors::{config_error, io_error, Result};

/// Environment variable overriding the base directory
pub const HOME_ENV: &str = "CLIENTELE_HOME";

/// Config file name inside the base directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub user_prefs_path: PathBuf,
    pub log_profile: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_prefs_path: PathBuf::from("preferences.json"),
            log_profile: "quiet".to_string(),
        }
    }
}

impl Config {
    /// Load `path`, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Config> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(io_error("read_config", path, e)),
        };
        toml::from_str(&content).map_err(|e| config_error(path, e))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| config_error(path, e))?;
        atomic_write(path, content.as_bytes())
    }

    /// The logging profile named by `log_profile`
    pub fn profile(&self) -> Result<Profile> {
        self.log_profile
            .parse()
            .map_err(|reason: String| config_error(Path::new(CONFIG_FILE_NAME), reason))
    }
}

/// Base directory from an explicit choice or `$CLIENTELE_HOME`
pub fn resolve_base_dir(explicit: Option<PathBuf>) -> PathBuf {
    resolve_base_dir_from(explicit, std::env::var_os(HOME_ENV))
}

fn resolve_base_dir_from(explicit: Option<PathBuf>, home: Option<OsString>) -> PathBuf {
    explicit
        .or_else(|| home.filter(|h| !h.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}
