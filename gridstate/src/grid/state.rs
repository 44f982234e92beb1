//! Grid state controller.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::column::{Column, ExportFormat};
use crate::compose::{compose_columns, reconcile_order, FeatureFlags};
use crate::context::GridContext;
use crate::drag::DragContext;
use crate::error::GridError;
use crate::filter::{Filter, FilterSpec};
use crate::ownership::{Ownership, PaginationState, SortState};
use crate::row::GridRow;
use crate::selection::{PageSelection, Selection};
use crate::expand::Expansion;

/// Unique identifier for a Grid instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridId(usize);

impl GridId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for GridId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__grid_{}", self.0)
    }
}

/// Serializable snapshot of the view state (for integrators that persist
/// pagination/sorting/filters across sessions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub pagination: PaginationState,
    pub page_count: usize,
    pub sorting: SortState,
    pub filters: Vec<Filter>,
    pub flags: FeatureFlags,
}

/// Internal state for a Grid.
#[derive(Debug)]
pub(super) struct GridInner<T: GridRow> {
    /// Caller-supplied data columns.
    pub base_columns: Vec<Column<T>>,
    /// Composed columns (base plus structural).
    pub columns: Vec<Column<T>>,
    /// Current column order (ids), mutated by column drags.
    pub column_order: Vec<String>,
    /// Feature toggles.
    pub flags: FeatureFlags,
    /// The working row collection.
    pub rows: Vec<T>,
    /// Bumped on every `set_rows`; drag contexts carry the generation they
    /// started under so stale gestures can be detected.
    pub generation: u64,
    /// Pagination ownership.
    pub pagination: Ownership<PaginationState>,
    /// Caller-supplied total page count (delegated pagination only).
    pub page_count_hint: Option<usize>,
    /// Sorting ownership.
    pub sorting: Ownership<SortState>,
    /// Client-only column filters.
    pub filters: Vec<Filter>,
    /// Selected row ids.
    pub selection: Selection,
    /// Expanded row ids.
    pub expansion: Expansion,
    /// In-progress drag gesture, if any.
    pub drag: Option<DragContext>,
    /// Set when a drag was abandoned because the rows changed under it.
    pub drag_abandoned: bool,
    // One-shot diagnostic latches.
    pub warned_missing_row_id: bool,
    pub warned_local_edit: bool,
    pub warned_ownership: bool,
}

impl<T: GridRow> GridInner<T> {
    fn new(base_columns: Vec<Column<T>>) -> Self {
        let flags = FeatureFlags::default();
        let columns = compose_columns(&base_columns, flags);
        let column_order = columns.iter().map(|c| c.id.clone()).collect();
        Self {
            base_columns,
            columns,
            column_order,
            flags,
            rows: Vec::new(),
            generation: 0,
            pagination: Ownership::Local(PaginationState::default()),
            page_count_hint: None,
            sorting: Ownership::Local(SortState::default()),
            filters: Vec::new(),
            selection: Selection::new(),
            expansion: Expansion::new(),
            drag: None,
            drag_abandoned: false,
            warned_missing_row_id: false,
            warned_local_edit: false,
            warned_ownership: false,
        }
    }
}

/// The data-grid state engine.
///
/// `Grid<T>` is the single source of truth for pagination, sorting,
/// filtering, selection, expansion, column order and the working row
/// collection. It is cheap to clone (all clones share state) and every
/// state transition is synchronous; there is no background work.
#[derive(Debug)]
pub struct Grid<T: GridRow> {
    /// Unique identifier.
    id: GridId,
    /// Internal state.
    pub(super) inner: Arc<RwLock<GridInner<T>>>,
    /// Dirty flag for re-render.
    pub(super) dirty: Arc<AtomicBool>,
}

impl<T: GridRow> Clone for Grid<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: GridRow> Grid<T> {
    /// Create a new grid with the given data columns.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            id: GridId::new(),
            inner: Arc::new(RwLock::new(GridInner::new(columns))),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the initial rows.
    pub fn with_rows(self, rows: Vec<T>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows = rows;
        }
        self
    }

    /// Set the feature flags. Recomposes structural columns.
    pub fn with_flags(self, flags: FeatureFlags) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.flags = flags;
            Self::recompose(&mut guard);
        }
        self
    }

    /// Set the local page size.
    pub fn with_page_size(self, page_size: usize) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            if let Some(p) = guard.pagination.local_mut() {
                p.page_size = page_size.max(1);
            }
        }
        self
    }

    /// Delegate pagination to the caller. The engine mirrors `state` and
    /// `page_count` and requests changes through `on_change` only; it never
    /// paginates the rows it is given.
    pub fn with_server_pagination(
        self,
        state: PaginationState,
        page_count: usize,
        on_change: impl Fn(&PaginationState) + Send + Sync + 'static,
    ) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.pagination = Ownership::Delegated {
                state,
                on_change: Arc::new(on_change),
            };
            guard.page_count_hint = Some(page_count);
        }
        self
    }

    /// Delegate sorting to the caller.
    pub fn with_server_sorting(
        self,
        state: SortState,
        on_change: impl Fn(&SortState) + Send + Sync + 'static,
    ) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.sorting = Ownership::Delegated {
                state,
                on_change: Arc::new(on_change),
            };
        }
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> GridId {
        self.id
    }

    /// Create the context handed to presentational children.
    pub fn context(&self) -> GridContext<T> {
        GridContext::new(self)
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// Get the composed column list (base plus structural).
    pub fn columns(&self) -> Vec<Column<T>> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Get the current column order (ids).
    pub fn column_order(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.column_order.clone())
            .unwrap_or_default()
    }

    /// Get the composed columns in the current order.
    pub fn ordered_columns(&self) -> Vec<Column<T>> {
        self.inner
            .read()
            .map(|g| {
                g.column_order
                    .iter()
                    .filter_map(|id| g.columns.iter().find(|c| &c.id == id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Replace the base columns. Structural columns are recomposed and the
    /// user's column order is reconciled rather than reset.
    pub fn set_columns(&self, columns: Vec<Column<T>>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.base_columns = columns;
            Self::recompose(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Columns included in the given export format, in current order.
    /// Structural columns are excluded by default.
    pub fn exportable_columns(&self, format: ExportFormat) -> Vec<Column<T>> {
        self.ordered_columns()
            .into_iter()
            .filter(|c| c.export.allows(format))
            .collect()
    }

    fn recompose(guard: &mut GridInner<T>) {
        let composed = compose_columns(&guard.base_columns, guard.flags);
        guard.column_order = reconcile_order(&guard.column_order, &composed);
        guard.columns = composed;
    }

    // -------------------------------------------------------------------------
    // Feature flags
    // -------------------------------------------------------------------------

    /// Get the feature flags.
    pub fn flags(&self) -> FeatureFlags {
        self.inner.read().map(|g| g.flags).unwrap_or_default()
    }

    /// Change the feature flags. This is the one explicit reset point:
    /// structural columns are recomposed, and disabling selection or
    /// expansion clears the corresponding state.
    pub fn set_flags(&self, flags: FeatureFlags) {
        if let Ok(mut guard) = self.inner.write() {
            guard.flags = flags;
            Self::recompose(&mut guard);
            if !flags.selection {
                guard.selection.clear();
            }
            if !flags.expansion {
                guard.expansion.collapse_all();
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Get the number of working rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a row by working-collection index.
    pub fn row(&self, index: usize) -> Option<T> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.rows.get(index).cloned())
    }

    /// Get the full working row collection.
    pub fn rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Current row-collection generation. Bumped by every [`set_rows`].
    ///
    /// [`set_rows`]: Grid::set_rows
    pub fn generation(&self) -> u64 {
        self.inner.read().map(|g| g.generation).unwrap_or(0)
    }

    /// Replace the working row collection.
    ///
    /// Selection and expansion ids that no longer resolve are pruned; an
    /// in-flight drag is abandoned as a no-op drop. Pagination and sorting
    /// are left alone: replacing row contents is not a state reset.
    pub fn set_rows(&self, rows: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.generation = guard.generation.wrapping_add(1);
            if guard.drag.take().is_some() {
                guard.drag_abandoned = true;
                log::warn!("{}", GridError::StaleDrag);
            }
            guard.rows = rows;
            let valid: HashSet<String> = Self::row_ids_inner(&guard).into_iter().collect();
            guard.selection.retain(&valid);
            guard.expansion.retain(&valid);
            // Clamp a local page index that now points past the end.
            let page_count = Self::page_count_inner(&guard);
            if let Some(p) = guard.pagination.local_mut() {
                p.page_index = p.page_index.min(page_count.saturating_sub(1));
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Replace one row in the working collection.
    ///
    /// Under caller-owned pagination this only patches the locally cached
    /// page: the edit is not persisted anywhere, which is warned about once
    /// so integrators know to mutate their own data source.
    pub fn update_row(&self, index: usize, row: T) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            if index >= guard.rows.len() {
                log::debug!("update_row index {} out of range", index);
                return false;
            }
            if guard.pagination.is_delegated() && !guard.warned_local_edit {
                guard.warned_local_edit = true;
                log::warn!(
                    "pagination is caller-owned; update_row patches the cached page only and does not persist"
                );
            }
            guard.rows[index] = row;
            self.dirty.store(true, Ordering::SeqCst);
            return true;
        }
        false
    }

    // -------------------------------------------------------------------------
    // Row identity
    // -------------------------------------------------------------------------

    /// Resolve an id for every working row, falling back to the row's
    /// working-collection index where no stable id exists.
    pub fn row_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| Self::row_ids_inner(&g))
            .unwrap_or_default()
    }

    /// Resolve reorder ids: every row must have a real stable id. A missing
    /// id is a configuration error (reported once) and yields `None`,
    /// disabling reorder for this pass.
    pub fn reorder_ids(&self) -> Option<Vec<String>> {
        self.inner
            .write()
            .ok()
            .and_then(|mut g| Self::reorder_ids_inner(&mut g))
    }

    pub(super) fn row_ids_inner(guard: &GridInner<T>) -> Vec<String> {
        guard
            .rows
            .iter()
            .enumerate()
            .map(|(i, r)| r.id().unwrap_or_else(|| i.to_string()))
            .collect()
    }

    pub(super) fn reorder_ids_inner(guard: &mut GridInner<T>) -> Option<Vec<String>> {
        let mut ids = Vec::with_capacity(guard.rows.len());
        for (index, row) in guard.rows.iter().enumerate() {
            match row.id() {
                Some(id) => ids.push(id),
                None => {
                    if !guard.warned_missing_row_id {
                        guard.warned_missing_row_id = true;
                        log::warn!("{}", GridError::MissingRowId { index });
                    }
                    return None;
                }
            }
        }
        Some(ids)
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Get the current pagination state (local or mirrored).
    pub fn pagination_state(&self) -> PaginationState {
        self.inner
            .read()
            .map(|g| *g.pagination.get())
            .unwrap_or_default()
    }

    /// Get the current page index.
    pub fn page_index(&self) -> usize {
        self.pagination_state().page_index
    }

    /// Get the page size.
    pub fn page_size(&self) -> usize {
        self.pagination_state().page_size
    }

    /// Request a page change.
    ///
    /// Locally owned pagination mutates (and clamps) in place and returns
    /// whether the index changed. Delegated pagination invokes the caller's
    /// callback exactly once with the requested state and returns false;
    /// the mirror is updated only when the caller syncs new state in.
    pub fn set_page_index(&self, index: usize) -> bool {
        let mut callback = None;
        let mut changed = false;
        if let Ok(mut guard) = self.inner.write() {
            let page_count = Self::page_count_inner(&guard);
            match &mut guard.pagination {
                Ownership::Local(p) => {
                    let clamped = index.min(page_count.saturating_sub(1));
                    if p.page_index != clamped {
                        p.page_index = clamped;
                        changed = true;
                    }
                }
                Ownership::Delegated { state, on_change } => {
                    let mut next = *state;
                    next.page_index = index;
                    callback = Some((Arc::clone(on_change), next));
                }
            }
        }
        if changed {
            self.dirty.store(true, Ordering::SeqCst);
        }
        if let Some((on_change, next)) = callback {
            on_change(&next);
        }
        changed
    }

    /// Advance to the next page.
    pub fn next_page(&self) -> bool {
        self.set_page_index(self.page_index().saturating_add(1))
    }

    /// Go back one page.
    pub fn prev_page(&self) -> bool {
        self.set_page_index(self.page_index().saturating_sub(1))
    }

    /// Request a page-size change (same ownership rules as
    /// [`set_page_index`](Grid::set_page_index)).
    pub fn set_page_size(&self, page_size: usize) -> bool {
        let page_size = page_size.max(1);
        let mut callback = None;
        let mut changed = false;
        if let Ok(mut guard) = self.inner.write() {
            match &mut guard.pagination {
                Ownership::Local(p) => {
                    if p.page_size != page_size {
                        p.page_size = page_size;
                        p.page_index = 0;
                        changed = true;
                    }
                }
                Ownership::Delegated { state, on_change } => {
                    let mut next = *state;
                    next.page_size = page_size;
                    callback = Some((Arc::clone(on_change), next));
                }
            }
        }
        if changed {
            self.dirty.store(true, Ordering::SeqCst);
        }
        if let Some((on_change, next)) = callback {
            on_change(&next);
        }
        changed
    }

    /// Refresh the mirrored pagination state from a caller-owned source.
    /// Ignored (with a one-shot diagnostic) when pagination is local:
    /// ownership is fixed at construction.
    pub fn sync_pagination(&self, state: PaginationState, page_count: usize) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.pagination.sync(state) {
                guard.page_count_hint = Some(page_count);
                self.dirty.store(true, Ordering::SeqCst);
            } else if !guard.warned_ownership {
                guard.warned_ownership = true;
                log::warn!("{}", GridError::OwnershipFixed {
                    concern: "pagination"
                });
            }
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the current sort state (local or mirrored).
    pub fn sort_state(&self) -> SortState {
        self.inner
            .read()
            .map(|g| g.sorting.get().clone())
            .unwrap_or_default()
    }

    /// Cycle a column through ascending -> descending -> unsorted.
    ///
    /// Non-sortable and structural columns are ignored. Returns the
    /// resulting (local) or requested (delegated) sort state.
    pub fn toggle_sort(&self, column_id: &str) -> Option<SortState> {
        let mut callback = None;
        let mut result = None;
        if let Ok(mut guard) = self.inner.write() {
            let sortable = guard
                .columns
                .iter()
                .find(|c| c.id == column_id)
                .map(|c| c.sortable && !c.is_structural())
                .unwrap_or(false);
            if !sortable {
                log::debug!("toggle_sort ignored for non-sortable column '{}'", column_id);
                return None;
            }
            match &mut guard.sorting {
                Ownership::Local(s) => {
                    s.cycle(column_id);
                    result = Some(s.clone());
                }
                Ownership::Delegated { state, on_change } => {
                    let mut next = state.clone();
                    next.cycle(column_id);
                    callback = Some((Arc::clone(on_change), next.clone()));
                    result = Some(next);
                }
            }
        }
        if result.is_some() {
            self.dirty.store(true, Ordering::SeqCst);
        }
        if let Some((on_change, next)) = callback {
            on_change(&next);
        }
        result
    }

    /// Refresh the mirrored sort state from a caller-owned source. Ignored
    /// when sorting is local.
    pub fn sync_sorting(&self, state: SortState) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.sorting.sync(state) {
                self.dirty.store(true, Ordering::SeqCst);
            } else if !guard.warned_ownership {
                guard.warned_ownership = true;
                log::warn!("{}", GridError::OwnershipFixed { concern: "sorting" });
            }
        }
    }

    // -------------------------------------------------------------------------
    // Filters (always client-evaluated)
    // -------------------------------------------------------------------------

    /// Set (or replace) the filter for a column. Resets a locally owned
    /// page index to 0, since the old index may point past the filtered
    /// result.
    pub fn set_filter(&self, column: &str, spec: FilterSpec) {
        if let Ok(mut guard) = self.inner.write() {
            match guard.filters.iter_mut().find(|f| f.column == column) {
                Some(f) => f.spec = spec,
                None => guard.filters.push(Filter::new(column, spec)),
            }
            if let Some(p) = guard.pagination.local_mut() {
                p.page_index = 0;
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Remove the filter for a column.
    pub fn clear_filter(&self, column: &str) {
        if let Ok(mut guard) = self.inner.write() {
            guard.filters.retain(|f| f.column != column);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Remove all filters.
    pub fn clear_filters(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.filters.clear();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the active filters.
    pub fn filters(&self) -> Vec<Filter> {
        self.inner
            .read()
            .map(|g| g.filters.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle selection of a row by id. Returns whether the row is selected
    /// afterwards. Ignored unless the selection feature is enabled.
    pub fn toggle_select(&self, id: &str) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            if !guard.flags.selection {
                log::debug!("selection is not enabled for this grid");
                return false;
            }
            let selected = guard.selection.toggle(id);
            self.dirty.store(true, Ordering::SeqCst);
            return selected;
        }
        false
    }

    /// Check if a row is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(id))
            .unwrap_or(false)
    }

    /// Get all selected row ids.
    pub fn selected_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.selection.ids())
            .unwrap_or_default()
    }

    /// Select every row on the current page (the header checkbox).
    pub fn select_all_page(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if !guard.flags.selection {
                log::debug!("selection is not enabled for this grid");
                return;
            }
            let page_ids = Self::page_ids_inner(&guard);
            guard.selection.select_page(&page_ids);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Deselect every row on the current page.
    pub fn deselect_all_page(&self) {
        if let Ok(mut guard) = self.inner.write() {
            let page_ids = Self::page_ids_inner(&guard);
            guard.selection.deselect_page(&page_ids);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Tri-state selection summary for the current page.
    pub fn page_selection(&self) -> PageSelection {
        self.inner
            .read()
            .map(|g| {
                let page_ids = Self::page_ids_inner(&g);
                g.selection.page_state(&page_ids)
            })
            .unwrap_or(PageSelection::None)
    }

    // -------------------------------------------------------------------------
    // Expansion
    // -------------------------------------------------------------------------

    /// Toggle expansion of a row by id. Only rows with sub-rows can expand.
    /// Returns whether the row is expanded afterwards.
    pub fn toggle_expanded(&self, id: &str) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            if !guard.flags.expansion {
                log::debug!("expansion is not enabled for this grid");
                return false;
            }
            let expandable = guard.rows.iter().enumerate().any(|(i, r)| {
                r.id().unwrap_or_else(|| i.to_string()) == id && !r.sub_rows().is_empty()
            });
            if !expandable {
                log::debug!("row '{}' has no sub-rows; expansion ignored", id);
                return false;
            }
            let universe = Self::row_ids_inner(&guard);
            let expanded = guard.expansion.toggle(id, &universe);
            self.dirty.store(true, Ordering::SeqCst);
            return expanded;
        }
        false
    }

    /// Check if a row is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.expansion.is_expanded(id))
            .unwrap_or(false)
    }

    /// Expand every row (the header's expand-all affordance).
    pub fn expand_all(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if !guard.flags.expansion {
                log::debug!("expansion is not enabled for this grid");
                return;
            }
            guard.expansion.expand_all();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Collapse every row.
    pub fn collapse_all(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.expansion.collapse_all();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Snapshot
    // -------------------------------------------------------------------------

    /// Capture the current view state for persistence.
    pub fn snapshot(&self) -> GridSnapshot {
        self.inner
            .read()
            .map(|g| GridSnapshot {
                pagination: *g.pagination.get(),
                page_count: Self::page_count_inner(&g),
                sorting: g.sorting.get().clone(),
                filters: g.filters.clone(),
                flags: g.flags,
            })
            .unwrap_or_else(|_| GridSnapshot {
                pagination: PaginationState::default(),
                page_count: 1,
                sorting: SortState::default(),
                filters: Vec::new(),
                flags: FeatureFlags::default(),
            })
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the grid has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    pub(super) fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }
}
