//! gridstate - a headless state engine for interactive data grids.
//!
//! The engine owns (or mirrors) pagination, sorting, filtering, row
//! selection, hierarchical row expansion, column order and the working row
//! collection behind a single clone-shared [`Grid`] handle. Presentational
//! layers read through a [`GridContext`](context::GridContext); input
//! adapters feed reorder gestures in as [`DragEvent`](drag::DragEvent)s.
//!
//! Per concern, pagination and sorting can be owned locally or delegated
//! to the caller through change callbacks ([`Ownership`](ownership::Ownership));
//! filtering is always evaluated client-side. Structural columns (selection
//! checkbox, expand toggle, drag handle) are synthesized by a pure pass
//! over the caller's column list ([`compose_columns`](compose::compose_columns)).
//!
//! Everything is synchronous and event-driven: no background work, no
//! timers, no cross-instance shared state. Failure paths degrade to
//! "state unchanged, diagnostic logged" via the `log` facade; nothing in
//! this crate panics the caller.

pub mod column;
pub mod compose;
pub mod context;
pub mod drag;
pub mod error;
pub mod expand;
pub mod filter;
pub mod grid;
pub mod ownership;
pub mod row;
pub mod selection;

pub use context::GridContext;
pub use grid::{Grid, GridId, GridSnapshot, PageView};
pub use row::GridRow;

pub mod prelude {
    pub use crate::column::{
        CellValue, Column, ColumnKind, ColumnWidth, ExportFormat, ExportPolicy,
    };
    pub use crate::compose::{
        compose_columns, is_structural_id, FeatureFlags, DRAG_COLUMN, EXPAND_COLUMN,
        SELECT_COLUMN, SELECT_EXPAND_COLUMN,
    };
    pub use crate::context::GridContext;
    pub use crate::drag::{array_move, DragAxis, DragContext, DragEvent, DragKind};
    pub use crate::error::GridError;
    pub use crate::filter::{Filter, FilterSpec};
    pub use crate::grid::{Grid, GridId, GridSnapshot, PageView};
    pub use crate::ownership::{
        ColumnSort, Ownership, PaginationState, SortDirection, SortState,
    };
    pub use crate::row::GridRow;
    pub use crate::selection::{PageSelection, Selection};
}
