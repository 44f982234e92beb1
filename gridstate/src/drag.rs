//! Drag-reorder primitives.
//!
//! The coordination algorithm itself lives on [`Grid`](crate::Grid) (see
//! `grid/drag.rs`); this module holds the pieces shared with input-event
//! adapters. Any pointer, touch, or keyboard backend reduces its gestures
//! to [`DragEvent`] values and feeds them to [`Grid::on_drag`].

/// Movement axis for a drag gesture. Column drags are horizontal-only,
/// row drags vertical-only, so a gesture can never be misread as the
/// wrong kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAxis {
    Horizontal,
    Vertical,
}

/// What a drag gesture is reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Column,
    Row,
}

impl DragKind {
    /// The axis this kind of drag is restricted to.
    pub fn axis(&self) -> DragAxis {
        match self {
            DragKind::Column => DragAxis::Horizontal,
            DragKind::Row => DragAxis::Vertical,
        }
    }
}

/// Transient state for an in-progress drag gesture. One per grid instance;
/// dropped on drop or cancel.
#[derive(Debug, Clone)]
pub struct DragContext {
    /// Id of the item being dragged.
    pub active: String,
    /// Row or column gesture.
    pub kind: DragKind,
    /// Ordering at drag start, restored on cancel.
    pub(crate) origin: Vec<String>,
    /// Row-collection generation at drag start. A mismatch at drop time
    /// means the collection was replaced mid-drag.
    pub(crate) generation: u64,
}

/// A reorder gesture as seen by the engine, produced by whatever input
/// backend drives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// A drag started on the item with the given id.
    Start(String),
    /// A drag ended with `active` dropped over `over`.
    End { active: String, over: String },
    /// The gesture was aborted (escape, pointer lost).
    Cancel,
}

/// Remove the element at `old_index` and reinsert it at `new_index`,
/// preserving the relative order of all other elements.
///
/// Out-of-range indices are clamped; a move onto itself is a no-op.
pub fn array_move<T>(items: &mut Vec<T>, old_index: usize, new_index: usize) {
    if old_index >= items.len() || old_index == new_index {
        return;
    }
    let item = items.remove(old_index);
    let new_index = new_index.min(items.len());
    items.insert(new_index, item);
}

/// Clamp `old + delta` into `0..len` for discrete keyboard moves.
pub(crate) fn step_index(old: usize, delta: isize, len: usize) -> usize {
    let target = old as isize + delta;
    target.clamp(0, len.saturating_sub(1) as isize) as usize
}
