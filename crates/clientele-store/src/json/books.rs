//! Whole-book file layouts
//!
//! `addressbook.json` is `{"persons": [...]}`, `policybook.json` is
//! `{"policies": [...]}` and `tasklist.json` is `{"tasks": [...]}`.

use clientele_core::model::{AddressBook, EntityKind, PolicyBook, TaskList};
use serde::{Deserialize, Serialize};

use super::{JsonAdaptedPerson, JsonAdaptedPolicy, JsonAdaptedTask};
use crate::errors::{duplicate_records, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializableAddressBook {
    #[serde(default)]
    pub persons: Vec<JsonAdaptedPerson>,
}

impl From<&AddressBook> for JsonSerializableAddressBook {
    fn from(book: &AddressBook) -> Self {
        Self {
            persons: book.persons().iter().map(JsonAdaptedPerson::from).collect(),
        }
    }
}

impl JsonSerializableAddressBook {
    /// # Errors
    /// `DataLoading` for an invalid record or two persons with one name.
    pub fn to_model(&self) -> Result<AddressBook> {
        let persons = self
            .persons
            .iter()
            .map(JsonAdaptedPerson::to_model)
            .collect::<Result<Vec<_>>>()?;
        AddressBook::with_persons(persons).map_err(|_| duplicate_records(EntityKind::Person))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializablePolicyBook {
    #[serde(default)]
    pub policies: Vec<JsonAdaptedPolicy>,
}

impl From<&PolicyBook> for JsonSerializablePolicyBook {
    fn from(book: &PolicyBook) -> Self {
        Self {
            policies: book.policies().iter().map(JsonAdaptedPolicy::from).collect(),
        }
    }
}

impl JsonSerializablePolicyBook {
    /// # Errors
    /// `DataLoading` for an invalid record or two policies with one number.
    pub fn to_model(&self) -> Result<PolicyBook> {
        let policies = self
            .policies
            .iter()
            .map(JsonAdaptedPolicy::to_model)
            .collect::<Result<Vec<_>>>()?;
        PolicyBook::with_policies(policies).map_err(|_| duplicate_records(EntityKind::Policy))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializableTaskList {
    #[serde(default)]
    pub tasks: Vec<JsonAdaptedTask>,
}

impl From<&TaskList> for JsonSerializableTaskList {
    fn from(list: &TaskList) -> Self {
        Self {
            tasks: list.tasks().iter().map(JsonAdaptedTask::from).collect(),
        }
    }
}

impl JsonSerializableTaskList {
    /// # Errors
    /// `DataLoading` for an invalid record or a repeated task.
    pub fn to_model(&self) -> Result<TaskList> {
        let tasks = self
            .tasks
            .iter()
            .map(JsonAdaptedTask::to_model)
            .collect::<Result<Vec<_>>>()?;
        TaskList::with_tasks(tasks).map_err(|_| duplicate_records(EntityKind::Task))
    }
}
