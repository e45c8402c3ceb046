#![allow(dead_code)]

use std::fs;
use std::path::Path;

use clientele_core::errors::{ExError, ExErrorKind};
use clientele_core::model::{AddressBook, PolicyBook, TaskList};
use clientele_core::{Model, UserPrefs};
use clientele_engine::Logic;
use clientele_store::{Config, Storage};
use tempfile::TempDir;

/// Storage whose reads find nothing and whose writes always fail
pub struct FailingStorage;

fn write_refused(op: &str) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(op)
        .with_message("write refused")
}

impl Storage for FailingStorage {
    fn read_address_book(&self) -> clientele_store::Result<Option<AddressBook>> {
        Ok(None)
    }
    fn save_address_book(&self, _book: &AddressBook) -> clientele_store::Result<()> {
        Err(write_refused("save_address_book"))
    }
    fn read_policy_book(&self) -> clientele_store::Result<Option<PolicyBook>> {
        Ok(None)
    }
    fn save_policy_book(&self, _book: &PolicyBook) -> clientele_store::Result<()> {
        Err(write_refused("save_policy_book"))
    }
    fn read_task_list(&self) -> clientele_store::Result<Option<TaskList>> {
        Ok(None)
    }
    fn save_task_list(&self, _list: &TaskList) -> clientele_store::Result<()> {
        Err(write_refused("save_task_list"))
    }
    fn save_user_prefs(&self, _prefs: &UserPrefs) -> clientele_store::Result<()> {
        Err(write_refused("save_user_prefs"))
    }
}

pub fn failing_logic() -> Logic {
    Logic::new(Model::default(), Box::new(FailingStorage))
}

/// A `Logic` over a fresh data directory
pub fn open_temp() -> (TempDir, Logic) {
    let dir = TempDir::new().unwrap();
    let logic = clientele_engine::open(dir.path(), &Config::default());
    (dir, logic)
}

pub fn write_file(base: &Path, relative: &str, content: &str) {
    let path = base.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

pub fn read_json(base: &Path, relative: &str) -> serde_json::Value {
    let raw = fs::read_to_string(base.join(relative)).unwrap();
    serde_json::from_str(&raw).unwrap()
}
