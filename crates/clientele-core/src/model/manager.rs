//! In-memory model: the three books, user prefs and one filtered view per book

use super::books::{AddressBook, PolicyBook, TaskList};
use super::filtered::{FilteredList, Predicate, ShowAll};
use super::person::Person;
use super::policy::Policy;
use super::prefs::UserPrefs;
use super::task::Task;
use crate::errors::Result;

/// Everything a command can read or change
///
/// Cloning is cheap enough for tests that compare a model before and after
/// a failed command; filtered views share their predicates.
#[derive(Debug, Clone, Default)]
pub struct Model {
    address_book: AddressBook,
    policy_book: PolicyBook,
    task_list: TaskList,
    user_prefs: UserPrefs,
    filtered_persons: FilteredList<Person>,
    filtered_policies: FilteredList<Policy>,
    filtered_tasks: FilteredList<Task>,
}

impl Model {
    pub fn new(
        address_book: AddressBook,
        policy_book: PolicyBook,
        task_list: TaskList,
        user_prefs: UserPrefs,
    ) -> Self {
        Self {
            address_book,
            policy_book,
            task_list,
            user_prefs,
            ..Self::default()
        }
    }

    // ===== User prefs =====

    pub fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    pub fn set_user_prefs(&mut self, user_prefs: UserPrefs) {
        self.user_prefs = user_prefs;
    }

    // ===== Address book =====

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    pub fn set_address_book(&mut self, address_book: AddressBook) {
        self.address_book.reset_data(address_book);
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    /// Add a person and show the full list
    ///
    /// # Errors
    /// `Duplicate` if a person with the same name exists.
    pub fn add_person(&mut self, person: Person) -> Result<()> {
        self.address_book.add_person(person)?;
        self.update_filtered_persons(ShowAll);
        Ok(())
    }

    /// # Errors
    /// `NotFound` or `Duplicate`.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<()> {
        self.address_book.set_person(target, edited)
    }

    /// # Errors
    /// `NotFound` if `person` is not in the address book.
    pub fn delete_person(&mut self, person: &Person) -> Result<Person> {
        self.address_book.remove_person(person)
    }

    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.filtered_persons.view(self.address_book.persons())
    }

    pub fn update_filtered_persons(&mut self, predicate: impl Predicate<Person> + 'static) {
        self.filtered_persons.set_predicate(predicate);
    }

    // ===== Policy book =====

    pub fn policy_book(&self) -> &PolicyBook {
        &self.policy_book
    }

    pub fn set_policy_book(&mut self, policy_book: PolicyBook) {
        self.policy_book.reset_data(policy_book);
    }

    pub fn has_policy(&self, policy: &Policy) -> bool {
        self.policy_book.has_policy(policy)
    }

    /// # Errors
    /// `Duplicate` if a policy with the same number exists.
    pub fn add_policy(&mut self, policy: Policy) -> Result<()> {
        self.policy_book.add_policy(policy)?;
        self.update_filtered_policies(ShowAll);
        Ok(())
    }

    /// # Errors
    /// `NotFound` or `Duplicate`.
    pub fn set_policy(&mut self, target: &Policy, edited: Policy) -> Result<()> {
        self.policy_book.set_policy(target, edited)
    }

    /// # Errors
    /// `NotFound` if `policy` is not in the policy book.
    pub fn delete_policy(&mut self, policy: &Policy) -> Result<Policy> {
        self.policy_book.remove_policy(policy)
    }

    pub fn filtered_policies(&self) -> Vec<&Policy> {
        self.filtered_policies.view(self.policy_book.policies())
    }

    pub fn update_filtered_policies(&mut self, predicate: impl Predicate<Policy> + 'static) {
        self.filtered_policies.set_predicate(predicate);
    }

    // ===== Task list =====

    pub fn task_list(&self) -> &TaskList {
        &self.task_list
    }

    pub fn set_task_list(&mut self, task_list: TaskList) {
        self.task_list.reset_data(task_list);
    }

    pub fn has_task(&self, task: &Task) -> bool {
        self.task_list.has_task(task)
    }

    /// # Errors
    /// `Duplicate` if the same task exists.
    pub fn add_task(&mut self, task: Task) -> Result<()> {
        self.task_list.add_task(task)?;
        self.update_filtered_tasks(ShowAll);
        Ok(())
    }

    /// # Errors
    /// `NotFound` or `Duplicate`.
    pub fn set_task(&mut self, target: &Task, edited: Task) -> Result<()> {
        self.task_list.set_task(target, edited)
    }

    /// # Errors
    /// `NotFound` if `task` is not in the task list.
    pub fn delete_task(&mut self, task: &Task) -> Result<Task> {
        self.task_list.remove_task(task)
    }

    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.filtered_tasks.view(self.task_list.tasks())
    }

    pub fn update_filtered_tasks(&mut self, predicate: impl Predicate<Task> + 'static) {
        self.filtered_tasks.set_predicate(predicate);
    }

    /// Sum of the book revisions; changes whenever any book is mutated
    pub fn revision(&self) -> u64 {
        self.address_book.revision() + self.policy_book.revision() + self.task_list.revision()
    }
}

/// Books, prefs and what each filtered view currently shows
impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        self.address_book == other.address_book
            && self.policy_book == other.policy_book
            && self.task_list == other.task_list
            && self.user_prefs == other.user_prefs
            && self.filtered_persons() == other.filtered_persons()
            && self.filtered_policies() == other.filtered_policies()
            && self.filtered_tasks() == other.filtered_tasks()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::filtered::TaskContainsKeywords;
    use crate::model::task::TaskDescription;

    fn todo(description: &str) -> Task {
        Task::todo(TaskDescription::parse(description).unwrap())
    }

    #[test]
    fn test_equality_sees_filter_changes() {
        let mut model = Model::default();
        model.add_task(todo("buy milk")).unwrap();
        model.add_task(todo("pay bills")).unwrap();
        let before = model.clone();

        model.update_filtered_tasks(TaskContainsKeywords::new(vec!["milk".to_string()]));
        assert_ne!(model, before);
        assert_eq!(model.filtered_tasks().len(), 1);
    }

    #[test]
    fn test_revision_tracks_every_book() {
        let mut model = Model::default();
        let start = model.revision();
        model.add_task(todo("read")).unwrap();
        assert!(model.revision() > start);

        let after_add = model.revision();
        model.set_task_list(TaskList::new());
        assert!(model.revision() > after_add);
        assert!(model.task_list().tasks().is_empty());
    }

    #[test]
    fn test_add_resets_filter() {
        let mut model = Model::default();
        model.add_task(todo("buy milk")).unwrap();
        model.update_filtered_tasks(TaskContainsKeywords::new(vec!["nothing".to_string()]));
        assert!(model.filtered_tasks().is_empty());

        model.add_task(todo("pay bills")).unwrap();
        assert_eq!(model.filtered_tasks().len(), 2);
    }
}
