//! Narrowing a loaded suite to a caller-chosen subset of cases.
//!
//! Index filtering is duplicate-aware: traversing the requested index
//! sequence, an occurrence survives only if the same index does not appear
//! again later. Among duplicates, the last occurrence's
//! position wins, so the output order is the caller's traversal order, not
//! ascending index order. Out-of-range and negative indices are dropped
//! silently.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::suite::{TestCase, TestSet};

/// Picks the requested cases out of one group.
///
/// Pure; never fails. An empty index slice means "use everything".
pub fn select(indices: &[isize], group: &[TestCase]) -> Vec<TestCase> {
    if indices.is_empty() {
        return group.to_vec();
    }

    // Last-occurrence positions, so the duplicate-drop rule stays linear.
    let mut last_seen: HashMap<isize, usize> = HashMap::with_capacity(indices.len());
    for (pos, &index) in indices.iter().enumerate() {
        last_seen.insert(index, pos);
    }

    indices
        .iter()
        .enumerate()
        .filter(|&(pos, index)| last_seen[index] == pos)
        .filter_map(|(_, &index)| usize::try_from(index).ok())
        .filter_map(|index| group.get(index).cloned())
        .collect()
}

/// A composable request for a subset of a suite.
///
/// Built up from "everything in file F" by narrowing the valid and/or the
/// invalid group independently. A group that was never narrowed passes
/// through [`Selection::apply`] unchanged.
#[derive(Debug, Clone)]
pub struct Selection {
    path: PathBuf,
    valid: Option<Vec<isize>>,
    invalid: Option<Vec<isize>>,
}

impl Selection {
    /// All cases from the given suite file.
    pub fn all(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            valid: None,
            invalid: None,
        }
    }

    /// Narrows the valid group to the given index list.
    pub fn valid(mut self, indices: Vec<isize>) -> Self {
        self.valid = Some(indices);
        self
    }

    /// Narrows the invalid group to the given index list.
    pub fn invalid(mut self, indices: Vec<isize>) -> Self {
        self.invalid = Some(indices);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Produces the narrowed suite.
    pub fn apply(&self, set: &TestSet) -> TestSet {
        TestSet {
            valid: narrow(&self.valid, &set.valid),
            invalid: narrow(&self.invalid, &set.invalid),
        }
    }
}

fn narrow(indices: &Option<Vec<isize>>, group: &[TestCase]) -> Vec<TestCase> {
    match indices {
        Some(indices) => select(indices, group),
        None => group.to_vec(),
    }
}
