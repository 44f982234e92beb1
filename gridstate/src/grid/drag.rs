//! Drag-reorder coordination for the grid.
//!
//! One drag context per grid instance: drags are modal, a second gesture
//! cannot start until the current one ends or cancels. Column moves and
//! row moves are mutually exclusive per gesture; the axis restriction on
//! [`DragKind`](crate::drag::DragKind) keeps input adapters from
//! misclassifying one as the other.

use crate::compose::is_structural_id;
use crate::drag::{array_move, step_index, DragContext, DragEvent, DragKind};
use crate::error::GridError;
use crate::row::GridRow;

use super::state::Grid;

impl<T: GridRow> Grid<T> {
    /// Dispatch a drag event from an input adapter.
    pub fn on_drag(&self, event: DragEvent) -> bool {
        match event {
            DragEvent::Start(id) => self.drag_start(&id),
            DragEvent::End { active, over } => self.drag_end(&active, &over),
            DragEvent::Cancel => {
                self.drag_cancel();
                true
            }
        }
    }

    /// Whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.inner.read().map(|g| g.drag.is_some()).unwrap_or(false)
    }

    /// The active drag context, if any.
    pub fn drag_context(&self) -> Option<DragContext> {
        self.inner.read().ok().and_then(|g| g.drag.clone())
    }

    /// Whether row drag handles should be live: row-reorder enabled, every
    /// row resolvable to a stable id, and no row on the current page
    /// expanded (reordering with expanded rows has ambiguous drop targets).
    pub fn drag_handles_active(&self) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        if !guard.flags.row_reorder {
            return false;
        }
        if Self::reorder_ids_inner(&mut guard).is_none() {
            return false;
        }
        let page_ids = Self::page_ids_inner(&guard);
        !guard.expansion.any_of(&page_ids)
    }

    /// Begin a drag gesture on the item with the given id.
    ///
    /// Classifies the gesture as a column or row drag and records the
    /// pre-drag order for cancellation. Refused while another drag is in
    /// progress, for structural ids, and for row drags while any page row
    /// is expanded.
    pub fn drag_start(&self, id: &str) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        guard.drag_abandoned = false;
        if guard.drag.is_some() {
            log::warn!("{}", GridError::DragInProgress);
            return false;
        }
        if is_structural_id(id) {
            log::debug!("structural id '{}' cannot be dragged", id);
            return false;
        }

        if guard.flags.column_reorder && guard.column_order.iter().any(|c| c == id) {
            guard.drag = Some(DragContext {
                active: id.to_string(),
                kind: DragKind::Column,
                origin: guard.column_order.clone(),
                generation: guard.generation,
            });
            return true;
        }

        if guard.flags.row_reorder {
            if let Some(ids) = Self::reorder_ids_inner(&mut guard) {
                if ids.iter().any(|r| r == id) {
                    let page_ids = Self::page_ids_inner(&guard);
                    if guard.expansion.any_of(&page_ids) {
                        log::debug!("row drag ignored while rows are expanded");
                        return false;
                    }
                    guard.drag = Some(DragContext {
                        active: id.to_string(),
                        kind: DragKind::Row,
                        origin: ids,
                        generation: guard.generation,
                    });
                    return true;
                }
            } else {
                return false;
            }
        }

        log::warn!("{}", GridError::UnknownDragTarget(id.to_string()));
        false
    }

    /// End a drag gesture: `active` was dropped over `over`.
    ///
    /// No-op when the ids are equal, when either denotes a structural
    /// column, or when the row collection changed since the drag started.
    /// Column moves permute the column order; row moves permute the full
    /// working collection (cross-page reorder is unsupported: the move is
    /// applied to the rows as currently materialized). Returns whether an
    /// order changed.
    pub fn drag_end(&self, active: &str, over: &str) -> bool {
        let mut moved = false;
        {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            let context = guard.drag.take();

            if guard.drag_abandoned {
                // The collection was replaced while this gesture was in
                // flight; treat the drop as a no-op.
                guard.drag_abandoned = false;
                log::warn!("{}", GridError::StaleDrag);
                return false;
            }
            if let Some(context) = &context {
                if context.generation != guard.generation {
                    log::warn!("{}", GridError::StaleDrag);
                    return false;
                }
            }
            if active == over {
                log::debug!("drag ended over its own origin; no-op");
                return false;
            }
            if is_structural_id(active) || is_structural_id(over) {
                log::debug!("structural columns cannot be reordered");
                return false;
            }

            let kind = context.as_ref().map(|c| c.kind);
            let is_column_move = guard.flags.column_reorder
                && (kind == Some(DragKind::Column)
                    || (kind.is_none() && guard.column_order.iter().any(|c| c == active)));

            if is_column_move {
                let old_index = guard.column_order.iter().position(|c| c == active);
                let new_index = guard.column_order.iter().position(|c| c == over);
                match (old_index, new_index) {
                    (Some(old), Some(new)) => {
                        array_move(&mut guard.column_order, old, new);
                        moved = true;
                    }
                    (None, _) => {
                        log::warn!("{}", GridError::UnknownDragTarget(active.to_string()));
                    }
                    (_, None) => {
                        log::warn!("{}", GridError::UnknownDragTarget(over.to_string()));
                    }
                }
            } else if guard.flags.row_reorder {
                if let Some(ids) = Self::reorder_ids_inner(&mut guard) {
                    let old_index = ids.iter().position(|r| r == active);
                    let new_index = ids.iter().position(|r| r == over);
                    match (old_index, new_index) {
                        (Some(old), Some(new)) => {
                            array_move(&mut guard.rows, old, new);
                            moved = true;
                        }
                        (None, _) => {
                            log::warn!("{}", GridError::UnknownDragTarget(active.to_string()));
                        }
                        (_, None) => {
                            log::warn!("{}", GridError::UnknownDragTarget(over.to_string()));
                        }
                    }
                }
            } else {
                log::warn!("{}", GridError::UnknownDragTarget(active.to_string()));
            }
        }
        if moved {
            self.mark_dirty();
        }
        moved
    }

    /// Cancel the in-progress drag and restore the pre-drag order exactly.
    pub fn drag_cancel(&self) {
        let mut changed = false;
        {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            let Some(context) = guard.drag.take() else {
                return;
            };
            match context.kind {
                DragKind::Column => {
                    if guard.column_order != context.origin {
                        guard.column_order = context.origin;
                        changed = true;
                    }
                }
                DragKind::Row => {
                    if context.generation == guard.generation {
                        let mut remaining: Vec<T> = std::mem::take(&mut guard.rows);
                        let mut restored = Vec::with_capacity(remaining.len());
                        for id in &context.origin {
                            if let Some(pos) = remaining
                                .iter()
                                .position(|r| r.id().as_deref() == Some(id.as_str()))
                            {
                                restored.push(remaining.remove(pos));
                            }
                        }
                        restored.extend(remaining);
                        guard.rows = restored;
                        changed = true;
                    }
                }
            }
        }
        if changed {
            self.mark_dirty();
        }
    }

    /// Discrete keyboard reorder: move the item `delta` positions along its
    /// axis. Same classification and move algorithm as a pointer drag, no
    /// drag context involved. Returns whether an order changed.
    pub fn nudge(&self, id: &str, delta: isize) -> bool {
        if delta == 0 {
            return false;
        }
        if is_structural_id(id) {
            log::debug!("structural id '{}' cannot be moved", id);
            return false;
        }
        let mut moved = false;
        {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            let column_pos = if guard.flags.column_reorder {
                guard.column_order.iter().position(|c| c == id)
            } else {
                None
            };

            if let Some(old) = column_pos {
                let new = step_index(old, delta, guard.column_order.len());
                if new != old {
                    array_move(&mut guard.column_order, old, new);
                    moved = true;
                }
            } else if guard.flags.row_reorder {
                let page_ids = Self::page_ids_inner(&guard);
                if guard.expansion.any_of(&page_ids) {
                    log::debug!("row move ignored while rows are expanded");
                } else if let Some(ids) = Self::reorder_ids_inner(&mut guard) {
                    if let Some(old) = ids.iter().position(|r| r == id) {
                        let new = step_index(old, delta, ids.len());
                        if new != old {
                            array_move(&mut guard.rows, old, new);
                            moved = true;
                        }
                    } else {
                        log::warn!("{}", GridError::UnknownDragTarget(id.to_string()));
                    }
                }
            } else {
                log::warn!("{}", GridError::UnknownDragTarget(id.to_string()));
            }
        }
        if moved {
            self.mark_dirty();
        }
        moved
    }
}
