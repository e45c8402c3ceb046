//! Storage of the three books
//!
//! [`Storage`] is the seam the engine persists through; [`JsonStorage`] is
//! the file-backed implementation. Lifecycle logging belongs to the engine,
//! this layer only emits `tracing::debug!` details.

use std::path::{Path, PathBuf};

use clientele_core::model::{AddressBook, PolicyBook, TaskList, UserPrefs};

use crate::errors::Result;
use crate::json::{
    read_json_file, save_json_file, JsonSerializableAddressBook, JsonSerializablePolicyBook,
    JsonSerializableTaskList,
};
use crate::prefs;

/// Reads and writes the persisted state
///
/// Every `read_*` returns `Ok(None)` when nothing has been stored yet.
pub trait Storage: Send {
    fn read_address_book(&self) -> Result<Option<AddressBook>>;
    fn save_address_book(&self, book: &AddressBook) -> Result<()>;

    fn read_policy_book(&self) -> Result<Option<PolicyBook>>;
    fn save_policy_book(&self, book: &PolicyBook) -> Result<()>;

    fn read_task_list(&self) -> Result<Option<TaskList>>;
    fn save_task_list(&self, list: &TaskList) -> Result<()>;

    fn save_user_prefs(&self, prefs: &UserPrefs) -> Result<()>;
}

/// JSON files under a base directory, at the paths named by [`UserPrefs`]
#[derive(Debug, Clone)]
pub struct JsonStorage {
    base_dir: PathBuf,
    user_prefs_path: PathBuf,
    prefs: UserPrefs,
}

impl JsonStorage {
    /// `user_prefs_path` and the paths in `prefs` are resolved against
    /// `base_dir` unless absolute
    pub fn new(
        base_dir: impl Into<PathBuf>,
        user_prefs_path: impl AsRef<Path>,
        prefs: UserPrefs,
    ) -> Self {
        let base_dir = base_dir.into();
        let user_prefs_path = base_dir.join(user_prefs_path);
        Self {
            base_dir,
            user_prefs_path,
            prefs,
        }
    }

    pub fn address_book_path(&self) -> PathBuf {
        self.base_dir.join(self.prefs.address_book_path())
    }

    pub fn policy_book_path(&self) -> PathBuf {
        self.base_dir.join(self.prefs.policy_book_path())
    }

    pub fn task_list_path(&self) -> PathBuf {
        self.base_dir.join(self.prefs.task_list_path())
    }

    pub fn user_prefs_path(&self) -> &Path {
        &self.user_prefs_path
    }

    pub fn prefs(&self) -> &UserPrefs {
        &self.prefs
    }
}

impl Storage for JsonStorage {
    fn read_address_book(&self) -> Result<Option<AddressBook>> {
        let path = self.address_book_path();
        tracing::debug!(path = %path.display(), "reading address book");
        read_json_file::<JsonSerializableAddressBook>(&path)?
            .map(|stored| stored.to_model())
            .transpose()
    }

    fn save_address_book(&self, book: &AddressBook) -> Result<()> {
        let path = self.address_book_path();
        tracing::debug!(path = %path.display(), person_count = book.persons().len(), "saving address book");
        save_json_file(&path, &JsonSerializableAddressBook::from(book))
    }

    fn read_policy_book(&self) -> Result<Option<PolicyBook>> {
        let path = self.policy_book_path();
        tracing::debug!(path = %path.display(), "reading policy book");
        read_json_file::<JsonSerializablePolicyBook>(&path)?
            .map(|stored| stored.to_model())
            .transpose()
    }

    fn save_policy_book(&self, book: &PolicyBook) -> Result<()> {
        let path = self.policy_book_path();
        tracing::debug!(path = %path.display(), policy_count = book.policies().len(), "saving policy book");
        save_json_file(&path, &JsonSerializablePolicyBook::from(book))
    }

    fn read_task_list(&self) -> Result<Option<TaskList>> {
        let path = self.task_list_path();
        tracing::debug!(path = %path.display(), "reading task list");
        read_json_file::<JsonSerializableTaskList>(&path)?
            .map(|stored| stored.to_model())
            .transpose()
    }

    fn save_task_list(&self, list: &TaskList) -> Result<()> {
        let path = self.task_list_path();
        tracing::debug!(path = %path.display(), task_count = list.tasks().len(), "saving task list");
        save_json_file(&path, &JsonSerializableTaskList::from(list))
    }

    fn save_user_prefs(&self, prefs: &UserPrefs) -> Result<()> {
        tracing::debug!(path = %self.user_prefs_path.display(), "saving user prefs");
        prefs::save_user_prefs(&self.user_prefs_path, prefs)
    }
}
