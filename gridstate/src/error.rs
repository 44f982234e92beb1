//! Error taxonomy for the grid engine.
//!
//! All of these are developer diagnostics: the public entry points log them
//! through the `log` facade and degrade to "state unchanged". Nothing in
//! this crate panics the caller or unmounts the grid.

use thiserror::Error;

/// Things that can go wrong inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Row-reorder is enabled but a row did not resolve to a stable id.
    /// Reorder is disabled for the render pass; reported once, not per row.
    #[error("row-reorder requires a stable id for every row; row {index} has none")]
    MissingRowId { index: usize },

    /// A drag id did not resolve to a known row or column.
    #[error("drag target '{0}' does not resolve to a known row or column")]
    UnknownDragTarget(String),

    /// A second drag gesture started while one was in progress. Drags are
    /// modal: one active context per grid instance.
    #[error("a drag gesture is already in progress")]
    DragInProgress,

    /// The row collection was replaced mid-drag; the gesture is discarded
    /// and the last committed order stands.
    #[error("row collection changed mid-drag; gesture discarded")]
    StaleDrag,

    /// Attempt to change client/caller ownership after construction.
    #[error("{concern} ownership is fixed at construction; change ignored")]
    OwnershipFixed { concern: &'static str },
}
