//! Named list domain model.
//!
//! # Responsibility
//! - Define the numeric value type stored in lists.
//! - Provide the display record returned by store snapshots.
//! - Name store operations for errors and diagnostics.
//!
//! # Invariants
//! - Sorting uses `f64::total_cmp`, so it never panics on NaN.
//! - `NamedList` is a copy; mutating it never touches store state.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Numeric value held in a list.
pub type Number = f64;

/// Name of the list every fresh store is seeded with.
pub const DEFAULT_LIST_NAME: &str = "Liste";

/// Values of the seeded default list.
pub const DEFAULT_LIST_VALUES: [Number; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

/// Owned copy of one stored list, used for display and serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedList {
    pub name: String,
    pub values: Vec<Number>,
}

impl NamedList {
    pub fn new(name: impl Into<String>, values: Vec<Number>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Store operation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListOp {
    Add,
    Delete,
    Sort,
    Append,
    Get,
}

impl ListOp {
    /// Stable lowercase token used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Delete => "delete",
            Self::Sort => "sort",
            Self::Append => "append",
            Self::Get => "get",
        }
    }
}

impl Display for ListOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ascending order for list values.
fn compare_numbers(left: &Number, right: &Number) -> Ordering {
    left.total_cmp(right)
}

/// Sorts values in place, ascending.
pub fn sort_numbers(values: &mut [Number]) {
    values.sort_by(compare_numbers);
}
