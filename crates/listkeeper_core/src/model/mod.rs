//! Domain model for named numeric lists.
//!
//! # Responsibility
//! - Define the value and record types shared by repository and store.
//! - Keep ordering rules for list values in one place.
//!
//! # Invariants
//! - A list is identified only by its name; there is no separate ID.
//! - Values are plain numbers with a total ordering.

pub mod list;
