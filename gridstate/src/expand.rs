//! Hierarchical row expansion state.

use std::collections::HashSet;

/// Expanded rows: either everything at once (the header's expand-all
/// affordance) or an explicit id set.
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    all: bool,
    ids: HashSet<String>,
}

impl Expansion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle one row. `universe` is the full current row id list, needed
    /// to peel a single row out of the expand-all state.
    /// Returns whether the row is expanded afterwards.
    pub fn toggle(&mut self, id: &str, universe: &[String]) -> bool {
        if self.all {
            self.all = false;
            self.ids = universe.iter().filter(|u| *u != id).cloned().collect();
            false
        } else if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn expand_all(&mut self) {
        self.all = true;
        self.ids.clear();
    }

    pub fn collapse_all(&mut self) {
        self.all = false;
        self.ids.clear();
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.all || self.ids.contains(id)
    }

    /// Whether any of the given ids is expanded.
    pub fn any_of(&self, ids: &[String]) -> bool {
        if self.all {
            return !ids.is_empty();
        }
        ids.iter().any(|id| self.ids.contains(id))
    }

    /// Drop ids not present in the given valid set. Boolean-all survives a
    /// collection replacement; id sets are pruned.
    pub fn retain(&mut self, valid: &HashSet<String>) {
        if !self.all {
            self.ids.retain(|id| valid.contains(id));
        }
    }

    /// Whether nothing is expanded.
    pub fn is_collapsed(&self) -> bool {
        !self.all && self.ids.is_empty()
    }
}
