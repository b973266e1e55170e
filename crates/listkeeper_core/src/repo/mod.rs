//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the data access contract used by the list store.
//! - Isolate map/storage details from store orchestration.
//!
//! # Invariants
//! - Repositories do not validate names; that is the store's job.
//! - Repository APIs return semantic errors (`NotFound`) for missing keys.

pub mod list_repo;
