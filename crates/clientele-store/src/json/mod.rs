//! JSON file format
//!
//! Each book is stored as one object holding a list of adapted records. The
//! adapted types mirror the model with plain strings so that a hand-edited
//! file deserializes, and every value is then validated by the model's own
//! parsers.

pub mod books;
pub mod person;
pub mod policy;
pub mod task;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::atomic::atomic_write;
use crate::errors::{io_error, serialization_error, Result};

pub use books::{JsonSerializableAddressBook, JsonSerializablePolicyBook, JsonSerializableTaskList};
pub use person::JsonAdaptedPerson;
pub use policy::JsonAdaptedPolicy;
pub use task::JsonAdaptedTask;

/// Read and decode `path`; `None` if the file does not exist
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(io_error("read_json", path, e)),
    };
    let value = serde_json::from_str(&content).map_err(|e| serialization_error("decode_json", path, e))?;
    Ok(Some(value))
}

/// Encode `value` as pretty JSON and write it atomically
pub fn save_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content =
        serde_json::to_string_pretty(value).map_err(|e| serialization_error("encode_json", path, e))?;
    atomic_write(path, content.as_bytes())
}
