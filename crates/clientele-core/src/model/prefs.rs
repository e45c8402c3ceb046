use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where the three books are stored
///
/// Relative paths are resolved against the data directory by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPrefs {
    pub address_book_path: PathBuf,
    pub policy_book_path: PathBuf,
    pub task_list_path: PathBuf,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            address_book_path: PathBuf::from("data/addressbook.json"),
            policy_book_path: PathBuf::from("data/policybook.json"),
            task_list_path: PathBuf::from("data/tasklist.json"),
        }
    }
}

impl UserPrefs {
    pub fn address_book_path(&self) -> &Path {
        &self.address_book_path
    }

    pub fn policy_book_path(&self) -> &Path {
        &self.policy_book_path
    }

    pub fn task_list_path(&self) -> &Path {
        &self.task_list_path
    }
}
