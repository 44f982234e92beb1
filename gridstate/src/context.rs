//! Shared context published to presentational children.
//!
//! Toolbar, body and pager components read table state exclusively through
//! a [`GridContext`] instead of taking slices of raw state as props. All
//! contexts for a grid share the same underlying state, so there is a
//! single re-render path: any mutation sets the grid's dirty flag.

use crate::column::Column;
use crate::compose::FeatureFlags;
use crate::grid::{Grid, PageView};
use crate::row::GridRow;

/// Read/update surface handed to descendant components.
#[derive(Debug)]
pub struct GridContext<T: GridRow> {
    grid: Grid<T>,
}

impl<T: GridRow> Clone for GridContext<T> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid.clone(),
        }
    }
}

impl<T: GridRow> GridContext<T> {
    pub(crate) fn new(grid: &Grid<T>) -> Self {
        Self { grid: grid.clone() }
    }

    /// The live grid handle, for operations not wrapped here.
    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    /// The grid's feature flags.
    pub fn flags(&self) -> FeatureFlags {
        self.grid.flags()
    }

    /// The resolved column order (ids).
    pub fn column_order(&self) -> Vec<String> {
        self.grid.column_order()
    }

    /// Composed columns in the current order.
    pub fn ordered_columns(&self) -> Vec<Column<T>> {
        self.grid.ordered_columns()
    }

    /// The materialized current page.
    pub fn page(&self) -> PageView<T> {
        self.grid.page_view()
    }

    /// Replace one row in the working collection (see
    /// [`Grid::update_row`] for the persistence caveat).
    pub fn update_row(&self, index: usize, row: T) -> bool {
        self.grid.update_row(index, row)
    }

    /// Ordered row ids for the drag-sortable wrapper; `None` unless
    /// row-reorder is active and every row has a stable id.
    pub fn sortable_row_ids(&self) -> Option<Vec<String>> {
        self.grid.sortable_row_ids()
    }

    /// Whether row drag handles should render live.
    pub fn drag_handles_active(&self) -> bool {
        self.grid.drag_handles_active()
    }

    /// Whether any state changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.grid.is_dirty()
    }

    /// Acknowledge a render.
    pub fn clear_dirty(&self) {
        self.grid.clear_dirty()
    }
}
