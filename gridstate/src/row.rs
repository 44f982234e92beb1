//! Row model for the grid engine.

/// Trait for application rows managed by a [`Grid`](crate::Grid).
///
/// Rows are opaque to the engine. It only looks at them through two
/// accessors: a stable identifier and an optional set of sub-rows.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone)]
/// struct Student {
///     id: u32,
///     name: String,
///     placements: Vec<Student>,
/// }
///
/// impl GridRow for Student {
///     fn id(&self) -> Option<String> {
///         Some(self.id.to_string())
///     }
///
///     fn sub_rows(&self) -> &[Self] {
///         &self.placements
///     }
/// }
/// ```
pub trait GridRow: Clone + Send + Sync + 'static {
    /// Return a stable identifier for this row, if it has one.
    ///
    /// Rows without an id fall back to index-based ids for selection and
    /// expansion. Row-reorder requires a real id for every row; a single
    /// missing id disables reorder for the whole grid.
    fn id(&self) -> Option<String> {
        None
    }

    /// Sub-rows of this row. A non-empty slice makes the row expandable.
    fn sub_rows(&self) -> &[Self] {
        &[]
    }
}
