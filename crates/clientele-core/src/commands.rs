//! Command types representing every user-facing operation
//!
//! The parser turns one line of input into a [`Command`]; `apply()` executes
//! it against the model and returns a [`CommandResult`].

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};

use crate::commons::Index;
use crate::errors::{ClienteleError, Result};
use crate::model::person::{Address, Birthday, Email, Name, Phone, PremiumList, Tag};
use crate::model::policy::{PolicyLink, PolicyName, PolicyNumber, ProviderCompany};
use crate::model::task::TaskDescription;
use crate::model::{
    EntityKind, NameContainsKeywords, Person, Policy, PolicyContainsKeywords, Schedule, Task,
    TaskContainsKeywords,
};

/// Command enum representing all operations
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // ===== Persons =====
    /// Add a person to the address book
    AddPerson(Person),

    /// Edit the person at an index of the displayed person list
    EditPerson {
        index: Index,
        descriptor: EditPersonDescriptor,
    },

    /// Delete the person at an index of the displayed person list
    DeletePerson { index: Index },

    /// Empty the address book
    Clear,

    /// Show persons whose name contains any keyword
    FindPersons(NameContainsKeywords),

    /// Show every person
    ListPersons,

    // ===== Policies =====
    AddPolicy(Policy),

    EditPolicy {
        index: Index,
        descriptor: EditPolicyDescriptor,
    },

    DeletePolicy { index: Index },

    ClearPolicies,

    FindPolicies(PolicyContainsKeywords),

    ListPolicies,

    // ===== Tasks =====
    /// Add a todo, deadline or event
    AddTask(Task),

    EditTask {
        index: Index,
        descriptor: EditTaskDescriptor,
    },

    MarkTask { index: Index },

    UnmarkTask { index: Index },

    DeleteTask { index: Index },

    ClearTasks,

    FindTasks(TaskContainsKeywords),

    ListTasks,

    /// Show tasks falling on a date
    Schedule { date: NaiveDate },

    // ===== Application =====
    Help,

    Exit,
}

impl Command {
    /// The command word that produces this command, used in logs
    pub fn word(&self) -> &'static str {
        match self {
            Command::AddPerson(_) => "add",
            Command::EditPerson { .. } => "edit",
            Command::DeletePerson { .. } => "delete",
            Command::Clear => "clear",
            Command::FindPersons(_) => "find",
            Command::ListPersons => "list",
            Command::AddPolicy(_) => "addpolicy",
            Command::EditPolicy { .. } => "editpolicy",
            Command::DeletePolicy { .. } => "deletepolicy",
            Command::ClearPolicies => "clearpolicy",
            Command::FindPolicies(_) => "findpolicy",
            Command::ListPolicies => "listpolicy",
            Command::AddTask(task) => task.schedule().kind(),
            Command::EditTask { .. } => "edittask",
            Command::MarkTask { .. } => "mark",
            Command::UnmarkTask { .. } => "unmark",
            Command::DeleteTask { .. } => "deletetask",
            Command::ClearTasks => "cleartask",
            Command::FindTasks(_) => "findtask",
            Command::ListTasks => "listtask",
            Command::Schedule { .. } => "schedule",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    /// The collection this command works on, if any
    pub fn entity(&self) -> Option<EntityKind> {
        match self {
            Command::AddPerson(_)
            | Command::EditPerson { .. }
            | Command::DeletePerson { .. }
            | Command::Clear
            | Command::FindPersons(_)
            | Command::ListPersons => Some(EntityKind::Person),
            Command::AddPolicy(_)
            | Command::EditPolicy { .. }
            | Command::DeletePolicy { .. }
            | Command::ClearPolicies
            | Command::FindPolicies(_)
            | Command::ListPolicies => Some(EntityKind::Policy),
            Command::AddTask(_)
            | Command::EditTask { .. }
            | Command::MarkTask { .. }
            | Command::UnmarkTask { .. }
            | Command::DeleteTask { .. }
            | Command::ClearTasks
            | Command::FindTasks(_)
            | Command::ListTasks
            | Command::Schedule { .. } => Some(EntityKind::Task),
            Command::Help | Command::Exit => None,
        }
    }
}

/// Outcome of a successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    /// The front end should show usage help
    pub show_help: bool,
    /// The front end should shut down
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }

    pub fn help(feedback: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback)
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback)
        }
    }
}

/// Fields to change on a person; `None` keeps the current value
///
/// `tags: Some(empty)` clears the tags, likewise for premiums.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub birthday: Option<Birthday>,
    pub tags: Option<BTreeSet<Tag>>,
    pub premiums: Option<PremiumList>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.birthday.is_some()
            || self.tags.is_some()
            || self.premiums.is_some()
    }

    /// A copy of `person` with the edited fields replaced
    pub fn apply_to(&self, person: &Person) -> Person {
        Person::new(
            self.name.clone().unwrap_or_else(|| person.name.clone()),
            self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            self.email.clone().unwrap_or_else(|| person.email.clone()),
            self.address.clone().unwrap_or_else(|| person.address.clone()),
            self.birthday.unwrap_or(person.birthday),
            self.tags.clone().unwrap_or_else(|| person.tags.clone()),
            self.premiums
                .clone()
                .unwrap_or_else(|| person.premiums.clone()),
        )
    }
}

/// Fields to change on a policy; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditPolicyDescriptor {
    pub policy_number: Option<PolicyNumber>,
    pub policy_name: Option<PolicyName>,
    pub provider_company: Option<ProviderCompany>,
    pub policy_link: Option<PolicyLink>,
}

impl EditPolicyDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.policy_number.is_some()
            || self.policy_name.is_some()
            || self.provider_company.is_some()
            || self.policy_link.is_some()
    }

    pub fn apply_to(&self, policy: &Policy) -> Policy {
        Policy::new(
            self.policy_number
                .clone()
                .unwrap_or_else(|| policy.policy_number.clone()),
            self.policy_name
                .clone()
                .unwrap_or_else(|| policy.policy_name.clone()),
            self.provider_company
                .clone()
                .unwrap_or_else(|| policy.provider_company.clone()),
            self.policy_link
                .clone()
                .unwrap_or_else(|| policy.policy_link.clone()),
        )
    }
}

/// Fields to change on a task
///
/// `by` only applies to deadlines, `start`/`end` only to events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditTaskDescriptor {
    pub description: Option<TaskDescription>,
    pub by: Option<NaiveDateTime>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl EditTaskDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.description.is_some() || self.by.is_some() || self.start.is_some() || self.end.is_some()
    }

    /// A copy of `task` with the edited fields replaced, keeping its
    /// completion flag
    ///
    /// # Errors
    /// - `FieldNotApplicable` if a time field does not exist on the task kind
    /// - `InvalidEventRange` if the edited event would end before it starts
    pub fn apply_to(&self, task: &Task) -> Result<Task> {
        let schedule = match *task.schedule() {
            Schedule::Todo => {
                self.reject_by("todo")?;
                self.reject_range("todo")?;
                Schedule::Todo
            }
            Schedule::Deadline { by } => {
                self.reject_range("deadline")?;
                Schedule::Deadline {
                    by: self.by.unwrap_or(by),
                }
            }
            Schedule::Event { start, end } => {
                self.reject_by("event")?;
                Schedule::Event {
                    start: self.start.unwrap_or(start),
                    end: self.end.unwrap_or(end),
                }
            }
        };

        let description = self
            .description
            .clone()
            .unwrap_or_else(|| task.description().clone());
        Ok(Task::with_schedule(description, schedule)?.with_done(task.is_done()))
    }

    fn reject_by(&self, kind: &'static str) -> Result<()> {
        if self.by.is_some() {
            return Err(ClienteleError::FieldNotApplicable { field: "by", kind });
        }
        Ok(())
    }

    fn reject_range(&self, kind: &'static str) -> Result<()> {
        if self.start.is_some() {
            return Err(ClienteleError::FieldNotApplicable { field: "from", kind });
        }
        if self.end.is_some() {
            return Err(ClienteleError::FieldNotApplicable { field: "to", kind });
        }
        Ok(())
    }
}
