//! Client/caller ownership of pagination and sorting state.
//!
//! Each concern resolves to a tagged variant at construction: either the
//! engine owns the state (`Local`) or it mirrors caller-owned state and
//! requests changes through a callback (`Delegated`). Ownership never
//! changes for the lifetime of a grid instance.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Callback invoked with the requested next state when a delegated slice
/// is asked to change.
pub type ChangeHandler<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Who owns a state slice.
pub enum Ownership<S> {
    /// The engine owns and mutates the state.
    Local(S),
    /// The caller owns the state; the engine mirrors it and only ever
    /// invokes `on_change` with the requested next value.
    Delegated {
        state: S,
        on_change: ChangeHandler<S>,
    },
}

impl<S> Ownership<S> {
    /// Read the current state regardless of owner.
    pub fn get(&self) -> &S {
        match self {
            Ownership::Local(s) => s,
            Ownership::Delegated { state, .. } => state,
        }
    }

    /// Whether this slice is caller-owned.
    pub fn is_delegated(&self) -> bool {
        matches!(self, Ownership::Delegated { .. })
    }

    /// Mutable access to locally owned state.
    pub fn local_mut(&mut self) -> Option<&mut S> {
        match self {
            Ownership::Local(s) => Some(s),
            Ownership::Delegated { .. } => None,
        }
    }

    /// The change handler, when delegated.
    pub fn handler(&self) -> Option<ChangeHandler<S>> {
        match self {
            Ownership::Local(_) => None,
            Ownership::Delegated { on_change, .. } => Some(Arc::clone(on_change)),
        }
    }

    /// Refresh the mirror of a delegated slice with new caller state.
    /// Returns false (state untouched) when the slice is locally owned.
    pub fn sync(&mut self, new: S) -> bool {
        match self {
            Ownership::Local(_) => false,
            Ownership::Delegated { state, .. } => {
                *state = new;
                true
            }
        }
    }
}

impl<S: Clone> Clone for Ownership<S> {
    fn clone(&self) -> Self {
        match self {
            Ownership::Local(s) => Ownership::Local(s.clone()),
            Ownership::Delegated { state, on_change } => Ownership::Delegated {
                state: state.clone(),
                on_change: Arc::clone(on_change),
            },
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Ownership<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ownership::Local(s) => f.debug_tuple("Local").field(s).finish(),
            Ownership::Delegated { state, .. } => f.debug_tuple("Delegated").field(state).finish(),
        }
    }
}

// =============================================================================
// Pagination
// =============================================================================

/// Pagination state: zero-based page index and page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: 10,
        }
    }
}

// =============================================================================
// Sorting
// =============================================================================

/// Sort direction for a single column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One column's contribution to the sort order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSort {
    pub column: String,
    pub direction: SortDirection,
}

/// Ordered list of column sorts. The engine's toggle maintains a single
/// entry; delegated owners may mirror multi-column states.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState(pub Vec<ColumnSort>);

impl SortState {
    /// Direction currently applied to a column, if any.
    pub fn direction_of(&self, column: &str) -> Option<SortDirection> {
        self.0
            .iter()
            .find(|cs| cs.column == column)
            .map(|cs| cs.direction)
    }

    /// Cycle a column through ascending -> descending -> unsorted,
    /// replacing any other sorted column.
    pub fn cycle(&mut self, column: &str) {
        let next = match self.direction_of(column) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };
        self.0.clear();
        if let Some(direction) = next {
            self.0.push(ColumnSort {
                column: column.to_string(),
                direction,
            });
        }
    }

    /// Whether no sort is applied.
    pub fn is_unsorted(&self) -> bool {
        self.0.is_empty()
    }
}
