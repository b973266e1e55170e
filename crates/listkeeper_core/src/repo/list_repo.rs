//! List repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide keyed access to stored number sequences.
//! - Keep the backing collection type private to this module.
//!
//! # Invariants
//! - Keys are unique; `put` replaces any existing entry.
//! - Reads of a missing key return `RepoError::NotFound`, never a default.

use crate::model::list::Number;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for list lookups and removals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "list not found: `{name}`"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for named list storage.
pub trait ListRepository {
    /// Returns all stored names in unspecified order.
    fn names(&self) -> Vec<String>;
    fn get(&self, name: &str) -> RepoResult<&[Number]>;
    fn get_mut(&mut self, name: &str) -> RepoResult<&mut Vec<Number>>;
    /// Inserts or replaces. Returns `true` when an entry was replaced.
    fn put(&mut self, name: &str, values: Vec<Number>) -> bool;
    /// Removes an entry and returns its values.
    fn remove(&mut self, name: &str) -> RepoResult<Vec<Number>>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local list repository backed by a hash map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryListRepository {
    lists: HashMap<String, Vec<Number>>,
}

impl InMemoryListRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListRepository for InMemoryListRepository {
    fn names(&self) -> Vec<String> {
        self.lists.keys().cloned().collect()
    }

    fn get(&self, name: &str) -> RepoResult<&[Number]> {
        self.lists
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| RepoError::NotFound(name.to_string()))
    }

    fn get_mut(&mut self, name: &str) -> RepoResult<&mut Vec<Number>> {
        self.lists
            .get_mut(name)
            .ok_or_else(|| RepoError::NotFound(name.to_string()))
    }

    fn put(&mut self, name: &str, values: Vec<Number>) -> bool {
        self.lists.insert(name.to_string(), values).is_some()
    }

    fn remove(&mut self, name: &str) -> RepoResult<Vec<Number>> {
        self.lists
            .remove(name)
            .ok_or_else(|| RepoError::NotFound(name.to_string()))
    }

    fn len(&self) -> usize {
        self.lists.len()
    }
}
