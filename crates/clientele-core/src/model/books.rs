//! The three top-level collections
//!
//! Each book wraps one [`UniqueList`] and names its operations after the
//! entity it holds.

use std::fmt;

use super::person::Person;
use super::policy::Policy;
use super::task::Task;
use super::unique_list::UniqueList;
use crate::errors::Result;

/// Persons, unique by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    persons: UniqueList<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from `persons`
    ///
    /// # Errors
    /// `Duplicate` if two persons share a name.
    pub fn with_persons(persons: Vec<Person>) -> Result<Self> {
        let mut book = Self::new();
        book.persons.set_all(persons)?;
        Ok(book)
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    /// # Errors
    /// `Duplicate` if a person with the same name exists.
    pub fn add_person(&mut self, person: Person) -> Result<()> {
        self.persons.add(person)
    }

    /// # Errors
    /// `NotFound` or `Duplicate`, see [`UniqueList::set`].
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<()> {
        self.persons.set(target, edited)
    }

    /// # Errors
    /// `NotFound` if `person` is not in the book.
    pub fn remove_person(&mut self, person: &Person) -> Result<Person> {
        self.persons.remove(person)
    }

    /// Replace the contents with those of `other`
    pub fn reset_data(&mut self, other: AddressBook) {
        self.persons.reset(other.persons);
    }

    pub fn persons(&self) -> &UniqueList<Person> {
        &self.persons
    }

    pub fn revision(&self) -> u64 {
        self.persons.revision()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} persons", self.persons.len())
    }
}

/// Policies, unique by policy number
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyBook {
    policies: UniqueList<Policy>,
}

impl PolicyBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// `Duplicate` if two policies share a number.
    pub fn with_policies(policies: Vec<Policy>) -> Result<Self> {
        let mut book = Self::new();
        book.policies.set_all(policies)?;
        Ok(book)
    }

    pub fn has_policy(&self, policy: &Policy) -> bool {
        self.policies.contains(policy)
    }

    /// # Errors
    /// `Duplicate` if a policy with the same number exists.
    pub fn add_policy(&mut self, policy: Policy) -> Result<()> {
        self.policies.add(policy)
    }

    /// # Errors
    /// `NotFound` or `Duplicate`, see [`UniqueList::set`].
    pub fn set_policy(&mut self, target: &Policy, edited: Policy) -> Result<()> {
        self.policies.set(target, edited)
    }

    /// # Errors
    /// `NotFound` if `policy` is not in the book.
    pub fn remove_policy(&mut self, policy: &Policy) -> Result<Policy> {
        self.policies.remove(policy)
    }

    pub fn reset_data(&mut self, other: PolicyBook) {
        self.policies.reset(other.policies);
    }

    pub fn policies(&self) -> &UniqueList<Policy> {
        &self.policies
    }

    pub fn revision(&self) -> u64 {
        self.policies.revision()
    }
}

impl fmt::Display for PolicyBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} policies", self.policies.len())
    }
}

/// Todos, deadlines and events
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: UniqueList<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// `Duplicate` if two tasks are the same task.
    pub fn with_tasks(tasks: Vec<Task>) -> Result<Self> {
        let mut list = Self::new();
        list.tasks.set_all(tasks)?;
        Ok(list)
    }

    pub fn has_task(&self, task: &Task) -> bool {
        self.tasks.contains(task)
    }

    /// # Errors
    /// `Duplicate` if the same task exists.
    pub fn add_task(&mut self, task: Task) -> Result<()> {
        self.tasks.add(task)
    }

    /// # Errors
    /// `NotFound` or `Duplicate`, see [`UniqueList::set`].
    pub fn set_task(&mut self, target: &Task, edited: Task) -> Result<()> {
        self.tasks.set(target, edited)
    }

    /// # Errors
    /// `NotFound` if `task` is not in the list.
    pub fn remove_task(&mut self, task: &Task) -> Result<Task> {
        self.tasks.remove(task)
    }

    pub fn reset_data(&mut self, other: TaskList) {
        self.tasks.reset(other.tasks);
    }

    pub fn tasks(&self) -> &UniqueList<Task> {
        &self.tasks
    }

    pub fn revision(&self) -> u64 {
        self.tasks.revision()
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tasks", self.tasks.len())
    }
}
