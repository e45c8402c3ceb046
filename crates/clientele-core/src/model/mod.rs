pub mod books;
pub mod filtered;
pub mod manager;
pub mod person;
pub mod policy;
pub mod prefs;
pub mod task;
pub mod unique_list;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use books::{AddressBook, PolicyBook, TaskList};
pub use filtered::{
    FilteredList, NameContainsKeywords, PolicyContainsKeywords, Predicate, ShowAll,
    TaskContainsKeywords, TaskOccursOn,
};
pub use manager::Model;
pub use person::Person;
pub use policy::Policy;
pub use prefs::UserPrefs;
pub use task::{Schedule, Task};
pub use unique_list::{Identity, UniqueList};

/// The three entity collections managed by Clientele
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Person,
    Policy,
    Task,
}

impl EntityKind {
    /// Name of the collection holding this entity, as shown to users
    pub fn container(&self) -> &'static str {
        match self {
            EntityKind::Person => "address book",
            EntityKind::Policy => "policy book",
            EntityKind::Task => "task list",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Person => "person",
            EntityKind::Policy => "policy",
            EntityKind::Task => "task",
        };
        f.write_str(label)
    }
}
