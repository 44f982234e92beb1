//! Structural column composition.
//!
//! A pure pass over the caller's column list: given the feature flags, it
//! prepends/appends the engine's structural columns at fixed positions.
//! Safe to recompute on every input change since structural ids are stable.

use serde::{Deserialize, Serialize};

use crate::column::{Column, ColumnKind};

/// Id of the selection-only structural column.
pub const SELECT_COLUMN: &str = "__select";
/// Id of the expansion-only structural column.
pub const EXPAND_COLUMN: &str = "__expand";
/// Id of the combined selection + expansion structural column.
pub const SELECT_EXPAND_COLUMN: &str = "__select_expand";
/// Id of the row drag-handle structural column.
pub const DRAG_COLUMN: &str = "__drag";

/// Feature toggles for a grid instance. Fixed for the instance's lifetime
/// except through an explicit [`Grid::set_flags`](crate::Grid::set_flags).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Row selection with a page-scoped select-all header checkbox.
    pub selection: bool,
    /// Hierarchical row expansion.
    pub expansion: bool,
    /// In-place row editing (published to the chrome; the engine itself
    /// always accepts `update_row`).
    pub editing: bool,
    /// Drag-based column reordering.
    pub column_reorder: bool,
    /// Drag-based row reordering. Requires a stable id for every row.
    pub row_reorder: bool,
}

/// Whether an id denotes an engine-synthesized structural column.
pub fn is_structural_id(id: &str) -> bool {
    matches!(
        id,
        SELECT_COLUMN | EXPAND_COLUMN | SELECT_EXPAND_COLUMN | DRAG_COLUMN
    )
}

/// Build the final ordered column list from the caller's base columns and
/// the feature flags.
///
/// Placement rules:
/// 1. selection + expansion enabled: one combined column at position 0
/// 2. selection only: selection column at position 0
/// 3. expansion only: expansion column at position 0
/// 4. row-reorder: drag-handle column appended after everything else
///
/// Base columns keep their relative order and appear exactly once.
pub fn compose_columns<T>(base: &[Column<T>], flags: FeatureFlags) -> Vec<Column<T>> {
    let mut columns = Vec::with_capacity(base.len() + 2);

    match (flags.selection, flags.expansion) {
        (true, true) => columns.push(Column::structural(
            ColumnKind::SelectExpand,
            SELECT_EXPAND_COLUMN,
            "",
        )),
        (true, false) => columns.push(Column::structural(ColumnKind::Select, SELECT_COLUMN, "")),
        (false, true) => columns.push(Column::structural(ColumnKind::Expand, EXPAND_COLUMN, "")),
        (false, false) => {}
    }

    columns.extend(base.iter().cloned());

    if flags.row_reorder {
        columns.push(Column::structural(ColumnKind::DragHandle, DRAG_COLUMN, ""));
    }

    columns
}

/// Merge a previous column order with a freshly composed column list.
///
/// Surviving ids keep the order the user put them in; ids that are new in
/// this composition are inserted at their canonical position (structural
/// columns pin to their edge, new data columns slot in after their nearest
/// surviving predecessor). Dropped ids disappear.
pub fn reconcile_order<T>(prior: &[String], composed: &[Column<T>]) -> Vec<String> {
    let mut order: Vec<String> = prior
        .iter()
        .filter(|id| composed.iter().any(|c| &c.id == *id))
        .cloned()
        .collect();

    for (idx, col) in composed.iter().enumerate() {
        if order.iter().any(|id| id == &col.id) {
            continue;
        }

        let insert_at = match col.kind {
            ColumnKind::Select | ColumnKind::Expand | ColumnKind::SelectExpand => 0,
            ColumnKind::DragHandle => order.len(),
            ColumnKind::Data => {
                // After the nearest preceding composed id that survived.
                let mut at = 0;
                for prev in composed[..idx].iter().rev() {
                    if let Some(pos) = order.iter().position(|id| id == &prev.id) {
                        at = pos + 1;
                        break;
                    }
                }
                at
            }
        };

        order.insert(insert_at, col.id.clone());
    }

    order
}
