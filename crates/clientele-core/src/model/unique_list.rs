use std::fmt;

use super::EntityKind;
use crate::errors::{ClienteleError, Result};

/// Entities stored in a [`UniqueList`]
///
/// `same_identity` compares only the identity fields (a person's name, a
/// policy's number); `PartialEq` compares every field.
pub trait Identity: PartialEq {
    const ENTITY: EntityKind;

    fn same_identity(&self, other: &Self) -> bool;
}

/// Ordered collection that never holds two elements with the same identity
///
/// Every successful mutation bumps `revision`, which callers poll to learn
/// whether the list changed (e.g. to decide whether to persist).
#[derive(Debug, Clone)]
pub struct UniqueList<T> {
    items: Vec<T>,
    revision: u64,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }
}

impl<T: Identity> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an element with the same identity is present
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing.same_identity(item))
    }

    /// Append an element
    ///
    /// # Errors
    /// `Duplicate` if an element with the same identity is already present.
    pub fn add(&mut self, item: T) -> Result<()> {
        if self.contains(&item) {
            return Err(ClienteleError::Duplicate { entity: T::ENTITY });
        }
        self.items.push(item);
        self.touch();
        Ok(())
    }

    /// Replace `target` with `edited` in place
    ///
    /// `edited` may share its identity with `target`, but not with any other
    /// element.
    ///
    /// # Errors
    /// - `NotFound` if `target` is not in the list
    /// - `Duplicate` if `edited` would clash with another element
    pub fn set(&mut self, target: &T, edited: T) -> Result<()> {
        let position = self
            .position_of(target)
            .ok_or(ClienteleError::NotFound { entity: T::ENTITY })?;

        let clashes = self
            .items
            .iter()
            .enumerate()
            .any(|(i, existing)| i != position && existing.same_identity(&edited));
        if clashes {
            return Err(ClienteleError::Duplicate { entity: T::ENTITY });
        }

        self.items[position] = edited;
        self.touch();
        Ok(())
    }

    /// Remove an element equal to `target`
    ///
    /// # Errors
    /// `NotFound` if no element equals `target`.
    pub fn remove(&mut self, target: &T) -> Result<T> {
        let position = self
            .position_of(target)
            .ok_or(ClienteleError::NotFound { entity: T::ENTITY })?;
        let removed = self.items.remove(position);
        self.touch();
        Ok(removed)
    }

    /// Replace the whole contents
    ///
    /// # Errors
    /// `Duplicate` if `items` contains two elements with the same identity;
    /// the list is left untouched in that case.
    pub fn set_all(&mut self, items: Vec<T>) -> Result<()> {
        if !are_unique(&items) {
            return Err(ClienteleError::Duplicate { entity: T::ENTITY });
        }
        self.items = items;
        self.touch();
        Ok(())
    }

    fn position_of(&self, target: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing == target)
    }
}

impl<T> UniqueList<T> {
    /// Read-only view of the elements in insertion order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Take over the contents of another list, which is unique already
    pub fn reset(&mut self, other: UniqueList<T>) {
        self.items = other.items;
        self.touch();
    }

    /// Number of successful mutations since creation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

fn are_unique<T: Identity>(items: &[T]) -> bool {
    items.iter().enumerate().all(|(i, a)| {
        items[i + 1..]
            .iter()
            .all(|b| !a.same_identity(b))
    })
}

/// Lists are equal when their elements are; revisions are bookkeeping
impl<T: PartialEq> PartialEq for UniqueList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for UniqueList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.items.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", rendered.join(", "))
    }
}
