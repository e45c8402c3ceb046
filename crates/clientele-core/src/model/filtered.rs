//! Predicate-restricted views over unique lists
//!
//! `find*` and `schedule` commands swap the predicate of a [`FilteredList`];
//! the underlying book is never touched.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;

use super::person::Person;
use super::policy::Policy;
use super::task::Task;
use super::unique_list::UniqueList;

/// A test applied to each element of a filtered view
pub trait Predicate<T>: fmt::Debug + Send + Sync {
    fn test(&self, item: &T) -> bool;
}

/// Matches every element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShowAll;

impl<T> Predicate<T> for ShowAll {
    fn test(&self, _item: &T) -> bool {
        true
    }
}

/// Returns true if `sentence` contains `word` as a whole word, ignoring case
pub fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim();
    if word.is_empty() {
        return false;
    }
    sentence
        .split_whitespace()
        .any(|candidate| candidate.to_lowercase() == word.to_lowercase())
}

fn any_keyword_in(keywords: &[String], fields: &[&str]) -> bool {
    keywords.iter().any(|keyword| {
        fields
            .iter()
            .any(|field| contains_word_ignore_case(field, keyword))
    })
}

/// Persons whose name contains any of the keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywords {
    keywords: Vec<String>,
}

impl NameContainsKeywords {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Predicate<Person> for NameContainsKeywords {
    fn test(&self, person: &Person) -> bool {
        any_keyword_in(&self.keywords, &[person.name.as_str()])
    }
}

/// Policies whose number, name or provider contains any of the keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyContainsKeywords {
    keywords: Vec<String>,
}

impl PolicyContainsKeywords {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Predicate<Policy> for PolicyContainsKeywords {
    fn test(&self, policy: &Policy) -> bool {
        any_keyword_in(
            &self.keywords,
            &[
                policy.policy_number.as_str(),
                policy.policy_name.as_str(),
                policy.provider_company.as_str(),
            ],
        )
    }
}

/// Tasks whose description contains any of the keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskContainsKeywords {
    keywords: Vec<String>,
}

impl TaskContainsKeywords {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Predicate<Task> for TaskContainsKeywords {
    fn test(&self, task: &Task) -> bool {
        any_keyword_in(&self.keywords, &[task.description().as_str()])
    }
}

/// Tasks falling on a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskOccursOn(pub NaiveDate);

impl Predicate<Task> for TaskOccursOn {
    fn test(&self, task: &Task) -> bool {
        task.occurs_on(self.0)
    }
}

/// A read-through view of a [`UniqueList`] restricted by a predicate
#[derive(Debug)]
pub struct FilteredList<T> {
    predicate: Arc<dyn Predicate<T>>,
}

impl<T> Clone for FilteredList<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T: 'static> Default for FilteredList<T> {
    fn default() -> Self {
        Self::new(ShowAll)
    }
}

impl<T: 'static> FilteredList<T> {
    pub fn new(predicate: impl Predicate<T> + 'static) -> Self {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    pub fn set_predicate(&mut self, predicate: impl Predicate<T> + 'static) {
        self.predicate = Arc::new(predicate);
    }

    /// Elements of `source` passing the predicate, in source order
    pub fn view<'a>(&self, source: &'a UniqueList<T>) -> Vec<&'a T> {
        source
            .iter()
            .filter(|item| self.predicate.test(item))
            .collect()
    }
}
