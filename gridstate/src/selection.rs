//! Row selection by id, with page-scoped select-all semantics.

use std::collections::HashSet;

/// Summary of a page's selection, for the header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelection {
    /// No row on the page is selected.
    None,
    /// Some, but not all, page rows are selected.
    Some,
    /// Every row on the page is selected.
    All,
}

/// Tracks selected rows by id.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a row. Returns whether the row is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    pub fn select(&mut self, id: &str) {
        self.selected.insert(id.to_string());
    }

    pub fn deselect(&mut self, id: &str) {
        self.selected.remove(id);
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Select every id on the given page.
    pub fn select_page(&mut self, page_ids: &[String]) {
        for id in page_ids {
            self.selected.insert(id.clone());
        }
    }

    /// Deselect every id on the given page.
    pub fn deselect_page(&mut self, page_ids: &[String]) {
        for id in page_ids {
            self.selected.remove(id);
        }
    }

    /// Tri-state summary for a page. An empty page reports `None`.
    pub fn page_state(&self, page_ids: &[String]) -> PageSelection {
        if page_ids.is_empty() {
            return PageSelection::None;
        }
        let count = page_ids.iter().filter(|id| self.selected.contains(*id)).count();
        if count == 0 {
            PageSelection::None
        } else if count == page_ids.len() {
            PageSelection::All
        } else {
            PageSelection::Some
        }
    }

    /// Drop ids not present in the given valid set. Called when the row
    /// collection is replaced.
    pub fn retain(&mut self, valid: &HashSet<String>) {
        self.selected.retain(|id| valid.contains(id));
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
