//! Named-list store.
//!
//! # Responsibility
//! - Own the name -> sequence mapping through a repository.
//! - Expose add/delete/sort/append plus read-only inspection.
//! - Map repository misses to store errors carrying display messages.
//!
//! # Invariants
//! - A fresh store built with `new()` holds `Liste = [1, 2, 3, 4, 5]`.
//! - `add` rejects only empty names and silently overwrites existing ones.
//! - Failed operations leave stored state unchanged.
//! - Log events carry lengths and counts, never names or values.

use crate::model::list::{
    sort_numbers, ListOp, NamedList, Number, DEFAULT_LIST_NAME, DEFAULT_LIST_VALUES,
};
use crate::repo::list_repo::{InMemoryListRepository, ListRepository, RepoError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MSG_NAME_REQUIRED: &str = "Bitte geben Sie einen Namen an";
pub const MSG_ADDED: &str = "Liste wurde hinzugefuegt";
pub const MSG_DELETED: &str = "Erfolgreich entfernt";
pub const MSG_APPENDED: &str = "Liste erfolgreich erweitert";
pub const MSG_NOT_FOUND: &str = "Fehler";
pub const MSG_APPEND_NOT_FOUND: &str = "Name fehlt oder falscher Name";

pub type StoreResult<T> = Result<T, StoreError>;

/// Machine-readable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    InvalidName,
    NotFound,
}

/// Store operation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `add` was called with an empty name.
    InvalidName,
    /// The operation targeted a name absent from the store.
    NotFound { name: String, op: ListOp },
}

impl StoreError {
    fn not_found(op: ListOp, err: RepoError) -> Self {
        match err {
            RepoError::NotFound(name) => Self::NotFound { name, op },
        }
    }

    pub fn kind(&self) -> StoreErrorKind {
        match self {
            Self::InvalidName => StoreErrorKind::InvalidName,
            Self::NotFound { .. } => StoreErrorKind::NotFound,
        }
    }

    /// User-facing message for display.
    ///
    /// Not-found messages do not include the missing name.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidName => MSG_NAME_REQUIRED,
            Self::NotFound {
                op: ListOp::Append, ..
            } => MSG_APPEND_NOT_FOUND,
            Self::NotFound { .. } => MSG_NOT_FOUND,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for StoreError {}

/// In-memory keeper of named number lists.
#[derive(Debug, Clone)]
pub struct ListKeeper<R: ListRepository = InMemoryListRepository> {
    repo: R,
}

impl ListKeeper<InMemoryListRepository> {
    /// Creates an in-memory store seeded with the default list.
    pub fn new() -> Self {
        let mut repo = InMemoryListRepository::new();
        repo.put(DEFAULT_LIST_NAME, DEFAULT_LIST_VALUES.to_vec());
        info!("event=store_init module=store status=ok seeded_lists=1");
        Self { repo }
    }
}

impl Default for ListKeeper<InMemoryListRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ListRepository> ListKeeper<R> {
    /// Creates a store over an existing repository without seeding it.
    pub fn with_repository(repo: R) -> Self {
        Self { repo }
    }

    /// Returns all list names, sorted ascending.
    pub fn list_names(&self) -> Vec<String> {
        let mut names = self.repo.names();
        names.sort();
        names
    }

    /// Returns a read-only view of one list.
    pub fn get(&self, name: &str) -> StoreResult<&[Number]> {
        self.repo
            .get(name)
            .map_err(|err| StoreError::not_found(ListOp::Get, err))
    }

    /// Inserts a list, replacing any list with the same name.
    ///
    /// # Errors
    /// - `StoreError::InvalidName` when `name` is empty.
    pub fn add(&mut self, name: &str, values: Vec<Number>) -> StoreResult<&'static str> {
        if name.is_empty() {
            warn!("event=list_add module=store status=error reason=invalid_name");
            return Err(StoreError::InvalidName);
        }

        let value_count = values.len();
        let replaced = self.repo.put(name, values);
        info!(
            "event=list_add module=store status=ok name_len={} value_count={} replaced={}",
            name.len(),
            value_count,
            replaced
        );
        Ok(MSG_ADDED)
    }

    /// Removes a list by name.
    pub fn delete(&mut self, name: &str) -> StoreResult<&'static str> {
        let removed = self
            .repo
            .remove(name)
            .map_err(|err| log_miss(ListOp::Delete, err))?;
        info!(
            "event=list_delete module=store status=ok value_count={}",
            removed.len()
        );
        Ok(MSG_DELETED)
    }

    /// Sorts a list in place, ascending, and returns the sorted values.
    pub fn sort(&mut self, name: &str) -> StoreResult<&[Number]> {
        let values = self
            .repo
            .get_mut(name)
            .map_err(|err| log_miss(ListOp::Sort, err))?;
        sort_numbers(values);
        info!(
            "event=list_sort module=store status=ok value_count={}",
            values.len()
        );
        Ok(values.as_slice())
    }

    /// Appends one value to the end of a list.
    pub fn append(&mut self, name: &str, value: Number) -> StoreResult<&'static str> {
        let values = self
            .repo
            .get_mut(name)
            .map_err(|err| log_miss(ListOp::Append, err))?;
        values.push(value);
        info!(
            "event=list_append module=store status=ok value_count={}",
            values.len()
        );
        Ok(MSG_APPENDED)
    }

    /// Returns owned copies of every list, sorted by name.
    pub fn snapshot(&self) -> Vec<NamedList> {
        self.list_names()
            .into_iter()
            .filter_map(|name| {
                let values = self.repo.get(&name).ok()?.to_vec();
                Some(NamedList::new(name, values))
            })
            .collect()
    }

    /// Number of stored lists.
    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }
}

fn log_miss(op: ListOp, err: RepoError) -> StoreError {
    warn!(
        "event=list_{} module=store status=error reason=not_found",
        op.as_str()
    );
    StoreError::not_found(op, err)
}

#[cfg(test)]
mod tests {
    use super::{ListKeeper, StoreError, StoreErrorKind, MSG_APPEND_NOT_FOUND, MSG_NOT_FOUND};
    use crate::model::list::ListOp;
    use crate::repo::list_repo::InMemoryListRepository;

    #[test]
    fn not_found_message_depends_on_operation() {
        let sort_miss = StoreError::NotFound {
            name: "x".to_string(),
            op: ListOp::Sort,
        };
        let append_miss = StoreError::NotFound {
            name: "x".to_string(),
            op: ListOp::Append,
        };
        assert_eq!(sort_miss.message(), MSG_NOT_FOUND);
        assert_eq!(append_miss.message(), MSG_APPEND_NOT_FOUND);
        assert_eq!(append_miss.to_string(), MSG_APPEND_NOT_FOUND);
        assert_eq!(sort_miss.kind(), StoreErrorKind::NotFound);
        assert_eq!(StoreError::InvalidName.kind(), StoreErrorKind::InvalidName);
    }

    #[test]
    fn with_repository_does_not_seed() {
        let keeper = ListKeeper::with_repository(InMemoryListRepository::new());
        assert!(keeper.is_empty());
        assert!(keeper.list_names().is_empty());
    }

    #[test]
    fn default_matches_new() {
        let keeper: ListKeeper = ListKeeper::default();
        assert_eq!(keeper.list_names(), ListKeeper::new().list_names());
    }
}
