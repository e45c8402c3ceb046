//! Startup: user prefs, storage and the initial model

use std::path::Path;
use std::time::Instant;

use clientele_core::errors::ExError;
use clientele_core::model::{PolicyBook, TaskList};
use clientele_core::sample::{sample_address_book, sample_policy_book};
use clientele_core::{log_op_end, log_op_start, Model, UserPrefs};
use clientele_store::prefs::read_user_prefs;
use clientele_store::{Config, JsonStorage, Storage};

use crate::logic::Logic;

/// Build a ready-to-use [`Logic`] for the data under `base_dir`
///
/// Unreadable prefs fall back to the defaults. See [`load_model`] for how
/// each book is recovered.
pub fn open(base_dir: &Path, config: &Config) -> Logic {
    let prefs_path = base_dir.join(&config.user_prefs_path);
    let prefs = match read_user_prefs(&prefs_path) {
        Ok(Some(prefs)) => prefs,
        Ok(None) => {
            tracing::info!(path = %prefs_path.display(), "preferences file not found, using defaults");
            UserPrefs::default()
        }
        Err(e) => {
            tracing::warn!(
                path = %prefs_path.display(),
                err_code = e.code(),
                "preferences file could not be loaded, using defaults"
            );
            UserPrefs::default()
        }
    };

    let storage = JsonStorage::new(base_dir, &config.user_prefs_path, prefs.clone());
    let model = load_model(&storage, prefs);
    Logic::new(model, Box::new(storage))
}

/// Read the three books into a model
///
/// - No address book on disk means a first run: the sample address book
///   and, unless one is stored, the sample policy book are used.
/// - A book that fails to load is replaced by an empty one and a warning is
///   logged. Nothing is written until a command changes that book.
pub fn load_model(storage: &dyn Storage, prefs: UserPrefs) -> Model {
    log_op_start!("load_model");
    let start = Instant::now();

    let (address_book, first_run) = match storage.read_address_book() {
        Ok(Some(book)) => (book, false),
        Ok(None) => {
            tracing::info!("address book not found, starting with sample data");
            (or_empty("address book", sample_address_book()), true)
        }
        Err(e) => (empty_after("address book", &e), false),
    };

    let policy_book = match storage.read_policy_book() {
        Ok(Some(book)) => book,
        Ok(None) if first_run => or_empty("policy book", sample_policy_book()),
        Ok(None) => PolicyBook::default(),
        Err(e) => empty_after("policy book", &e),
    };

    let task_list = match storage.read_task_list() {
        Ok(Some(list)) => list,
        Ok(None) => TaskList::default(),
        Err(e) => empty_after("task list", &e),
    };

    let model = Model::new(address_book, policy_book, task_list, prefs);

    log_op_end!(
        "load_model",
        duration_ms = start.elapsed().as_millis() as u64,
        person_count = model.address_book().persons().len(),
        policy_count = model.policy_book().policies().len(),
        task_count = model.task_list().tasks().len()
    );
    model
}

fn empty_after<T: Default>(what: &str, err: &ExError) -> T {
    tracing::warn!(
        err_code = err.code(),
        field = err.field().unwrap_or_default(),
        "{what} could not be loaded ({}), starting with an empty {what}",
        err.message()
    );
    T::default()
}

fn or_empty<T: Default>(what: &str, sample: clientele_core::Result<T>) -> T {
    sample.unwrap_or_else(|e| {
        tracing::warn!("sample {what} is invalid ({e}), starting with an empty {what}");
        T::default()
    })
}
