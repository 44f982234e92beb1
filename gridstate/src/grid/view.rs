//! Derived row views: filter, client sort, page slice.
//!
//! Ordering of passes is fixed: filters first (always client-evaluated),
//! then the client sorter when sorting is locally owned, then the page
//! slice when pagination is locally owned. Under caller-owned pagination
//! the supplied rows already are the page, so only filters apply.

use crate::ownership::{Ownership, SortDirection};
use crate::row::GridRow;

use super::state::{Grid, GridInner};

/// A materialized page of rows, ready for the presentational layer.
#[derive(Debug, Clone)]
pub struct PageView<T> {
    /// The rows on this page, in display order.
    pub rows: Vec<T>,
    /// Resolved id for each row, parallel to `rows`.
    pub ids: Vec<String>,
    /// Zero-based page index.
    pub page_index: usize,
    /// Total number of pages.
    pub page_count: usize,
    /// Number of rows passing the filters (pre-slice).
    pub filtered_len: usize,
}

impl<T: GridRow> Grid<T> {
    /// Materialize the current page.
    pub fn page_view(&self) -> PageView<T> {
        self.inner
            .read()
            .map(|g| {
                let filtered_len = Self::filtered_entries(&g).len();
                let entries = Self::page_entries_inner(&g);
                let ids = entries
                    .iter()
                    .map(|(i, r)| r.id().unwrap_or_else(|| i.to_string()))
                    .collect();
                PageView {
                    rows: entries.into_iter().map(|(_, r)| r).collect(),
                    ids,
                    page_index: g.pagination.get().page_index,
                    page_count: Self::page_count_inner(&g),
                    filtered_len,
                }
            })
            .unwrap_or_else(|_| PageView {
                rows: Vec::new(),
                ids: Vec::new(),
                page_index: 0,
                page_count: 1,
                filtered_len: 0,
            })
    }

    /// The rows on the current page, in display order.
    pub fn page_rows(&self) -> Vec<T> {
        self.page_view().rows
    }

    /// Total number of pages: caller-supplied under delegated pagination,
    /// computed from the filtered row count otherwise.
    pub fn page_count(&self) -> usize {
        self.inner
            .read()
            .map(|g| Self::page_count_inner(&g))
            .unwrap_or(1)
    }

    /// Ordered row ids for the drag-sortable wrapper: the current page's
    /// ids, available only when row-reorder is enabled and every row has a
    /// stable id.
    pub fn sortable_row_ids(&self) -> Option<Vec<String>> {
        let Ok(mut guard) = self.inner.write() else {
            return None;
        };
        if !guard.flags.row_reorder {
            return None;
        }
        Self::reorder_ids_inner(&mut guard)?;
        Some(Self::page_ids_inner(&guard))
    }

    /// Rows passing all filters, tagged with their working-collection index.
    pub(super) fn filtered_entries(guard: &GridInner<T>) -> Vec<(usize, T)> {
        guard
            .rows
            .iter()
            .cloned()
            .enumerate()
            .filter(|(_, row)| {
                guard.filters.iter().all(|filter| {
                    match guard.columns.iter().find(|c| c.id == filter.column) {
                        Some(column) => filter.spec.matches(&column.value(row)),
                        // Filter on an unknown column matches everything.
                        None => true,
                    }
                })
            })
            .collect()
    }

    /// Filtered entries in display order (client sort applied when local).
    pub(super) fn sorted_entries(guard: &GridInner<T>) -> Vec<(usize, T)> {
        let mut entries = Self::filtered_entries(guard);
        if let Ownership::Local(sort) = &guard.sorting {
            // Apply sort keys in reverse so the first key dominates
            // (stable sort preserves the later passes' order).
            for column_sort in sort.0.iter().rev() {
                let Some(column) = guard.columns.iter().find(|c| c.id == column_sort.column)
                else {
                    continue;
                };
                let direction = column_sort.direction;
                entries.sort_by(|(_, a), (_, b)| {
                    let ordering = column.value(a).cmp_value(&column.value(b));
                    match direction {
                        SortDirection::Ascending => ordering,
                        SortDirection::Descending => ordering.reverse(),
                    }
                });
            }
        }
        entries
    }

    /// The current page's entries: a slice of the sorted entries under
    /// local pagination, the whole (filtered) collection under delegated
    /// pagination.
    pub(super) fn page_entries_inner(guard: &GridInner<T>) -> Vec<(usize, T)> {
        let entries = Self::sorted_entries(guard);
        match &guard.pagination {
            Ownership::Local(p) => {
                let start = (p.page_index.saturating_mul(p.page_size)).min(entries.len());
                let end = start.saturating_add(p.page_size).min(entries.len());
                entries[start..end].to_vec()
            }
            Ownership::Delegated { .. } => entries,
        }
    }

    /// Resolved ids of the current page's rows.
    pub(super) fn page_ids_inner(guard: &GridInner<T>) -> Vec<String> {
        Self::page_entries_inner(guard)
            .into_iter()
            .map(|(i, r)| r.id().unwrap_or_else(|| i.to_string()))
            .collect()
    }

    /// Total page count for the current state.
    pub(super) fn page_count_inner(guard: &GridInner<T>) -> usize {
        match &guard.pagination {
            Ownership::Local(p) => {
                let filtered = Self::filtered_entries(guard).len();
                filtered.div_ceil(p.page_size.max(1)).max(1)
            }
            Ownership::Delegated { .. } => guard.page_count_hint.unwrap_or(1).max(1),
        }
    }
}
