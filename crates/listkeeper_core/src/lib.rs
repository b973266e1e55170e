//! Core logic for ListKeeper, an in-memory store of named number lists.
//! This crate is the single source of truth for store invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::list::{ListOp, NamedList, Number, DEFAULT_LIST_NAME, DEFAULT_LIST_VALUES};
pub use repo::list_repo::{InMemoryListRepository, ListRepository, RepoError, RepoResult};
pub use service::list_service::{ListKeeper, StoreError, StoreErrorKind, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
