//! User prefs file (`preferences.json`)

use std::path::Path;

use clientele_core::UserPrefs;

use crate::errors::Result;
use crate::json::{read_json_file, save_json_file};

/// `None` if the file does not exist
pub fn read_user_prefs(path: &Path) -> Result<Option<UserPrefs>> {
    read_json_file(path)
}

pub fn save_user_prefs(path: &Path, prefs: &UserPrefs) -> Result<()> {
    save_json_file(path, prefs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_missing_prefs_file() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_user_prefs(&dir.path().join("none.json")).unwrap(), None);
    }

    #[test]
    fn test_prefs_saved_and_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        let prefs = UserPrefs {
            task_list_path: PathBuf::from("elsewhere/tasks.json"),
            ..UserPrefs::default()
        };

        save_user_prefs(&path, &prefs).unwrap();
        assert_eq!(read_user_prefs(&path).unwrap(), Some(prefs));
    }
}
