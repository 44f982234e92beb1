//! Column definitions and cell values.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// =============================================================================
// CellValue
// =============================================================================

/// A value extracted from a row by a column accessor.
///
/// Used by the client-side sorter, by filters, and as the display form
/// handed to export collaborators.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    /// No value (structural columns, missing fields).
    Empty,
}

impl CellValue {
    /// Total ordering across cell values. Same-variant values compare
    /// naturally; mixed variants compare by rank (Empty < Bool < Number < Text).
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Empty, CellValue::Empty) => Ordering::Equal,
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Number(_) => 2,
            CellValue::Text(_) => 3,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

// =============================================================================
// Column
// =============================================================================

/// Column width specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fixed width in display units.
    Fixed(u16),
    /// Flexible width with weight.
    Flex(u16),
    /// Auto-size to content.
    Auto,
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1)
    }
}

/// What kind of column this is. Everything except `Data` is synthesized
/// by the engine rather than supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// Caller-supplied data column.
    Data,
    /// Row-selection checkbox column.
    Select,
    /// Expand/collapse toggle column.
    Expand,
    /// Combined selection + expansion column.
    SelectExpand,
    /// Drag handle for row reorder.
    DragHandle,
}

/// Export target format, consumed by export collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

/// Per-column export policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportPolicy {
    /// Include this column in CSV output.
    pub csv: bool,
    /// Include this column in PDF output.
    pub pdf: bool,
    /// Header text override for export output.
    pub header_override: Option<String>,
}

impl Default for ExportPolicy {
    fn default() -> Self {
        Self::included()
    }
}

impl ExportPolicy {
    /// Included in every format (default for data columns).
    pub fn included() -> Self {
        Self {
            csv: true,
            pdf: true,
            header_override: None,
        }
    }

    /// Excluded from every format (default for structural columns).
    pub fn excluded() -> Self {
        Self {
            csv: false,
            pdf: false,
            header_override: None,
        }
    }

    /// Whether this policy allows the given format.
    pub fn allows(&self, format: ExportFormat) -> bool {
        match format {
            ExportFormat::Csv => self.csv,
            ExportFormat::Pdf => self.pdf,
        }
    }
}

type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// A grid column definition.
///
/// Identity is the `id` string. Data columns carry an accessor producing the
/// cell value the sorter, filters and export collaborators operate on.
pub struct Column<T> {
    /// Unique identifier for this column.
    pub id: String,
    /// Header text.
    pub header: String,
    /// Data or synthesized structural column.
    pub kind: ColumnKind,
    /// Whether the client sorter may order by this column.
    pub sortable: bool,
    /// Width hint for the presentational layer.
    pub width: ColumnWidth,
    /// Export inclusion policy.
    pub export: ExportPolicy,
    accessor: Option<Accessor<T>>,
}

impl<T> Column<T> {
    /// Create a new data column with the given id and header.
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            kind: ColumnKind::Data,
            sortable: false,
            width: ColumnWidth::default(),
            export: ExportPolicy::included(),
            accessor: None,
        }
    }

    /// Create a structural column. Structural columns are never sortable
    /// and are excluded from export by default.
    pub(crate) fn structural(kind: ColumnKind, id: &str, header: &str) -> Self {
        Self {
            id: id.to_string(),
            header: header.to_string(),
            kind,
            sortable: false,
            width: ColumnWidth::Fixed(3),
            export: ExportPolicy::excluded(),
            accessor: None,
        }
    }

    /// Set the cell accessor.
    pub fn accessor(mut self, f: impl Fn(&T) -> CellValue + Send + Sync + 'static) -> Self {
        self.accessor = Some(Arc::new(f));
        self
    }

    /// Mark this column as sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set a fixed width for this column.
    pub fn fixed(mut self, width: u16) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set a flex width for this column.
    pub fn flex(mut self, weight: u16) -> Self {
        self.width = ColumnWidth::Flex(weight);
        self
    }

    /// Set auto width for this column.
    pub fn auto(mut self) -> Self {
        self.width = ColumnWidth::Auto;
        self
    }

    /// Set the export policy.
    pub fn export(mut self, policy: ExportPolicy) -> Self {
        self.export = policy;
        self
    }

    /// Exclude this column from all export formats.
    pub fn no_export(mut self) -> Self {
        self.export = ExportPolicy::excluded();
        self
    }

    /// Extract the cell value for a row. Columns without an accessor
    /// (structural columns) yield [`CellValue::Empty`].
    pub fn value(&self, row: &T) -> CellValue {
        match &self.accessor {
            Some(f) => f(row),
            None => CellValue::Empty,
        }
    }

    /// Whether this column was synthesized by the engine.
    pub fn is_structural(&self) -> bool {
        self.kind != ColumnKind::Data
    }

    /// Header text used for export output.
    pub fn export_header(&self) -> &str {
        self.export.header_override.as_deref().unwrap_or(&self.header)
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            kind: self.kind,
            sortable: self.sortable,
            width: self.width,
            export: self.export.clone(),
            accessor: self.accessor.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("kind", &self.kind)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .finish()
    }
}
