//! Declarative, client-only column filters.
//!
//! Filters are never delegated to the caller: they always evaluate against
//! the rows currently materialized in the grid (the full working collection
//! under local pagination, the cached page under delegated pagination).

use serde::{Deserialize, Serialize};

use crate::column::CellValue;

/// A predicate-producing description of a column filter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FilterSpec {
    /// Case-insensitive substring match on the cell's display form.
    Contains(String),
    /// Exact match on the cell's display form.
    Equals(String),
    /// Any-of exact match on the cell's display form.
    OneOf(Vec<String>),
}

impl FilterSpec {
    /// Evaluate this filter against a cell value.
    pub fn matches(&self, value: &CellValue) -> bool {
        let text = value.to_string();
        match self {
            FilterSpec::Contains(needle) => {
                text.to_lowercase().contains(&needle.to_lowercase())
            }
            FilterSpec::Equals(expected) => text == *expected,
            FilterSpec::OneOf(options) => options.iter().any(|o| *o == text),
        }
    }
}

/// A filter bound to a column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Column id the filter applies to.
    pub column: String,
    pub spec: FilterSpec,
}

impl Filter {
    pub fn new(column: impl Into<String>, spec: FilterSpec) -> Self {
        Self {
            column: column.into(),
            spec,
        }
    }
}
