use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use gridstate::prelude::*;

#[derive(Clone)]
struct Listing {
    slug: &'static str,
    company: &'static str,
}

impl GridRow for Listing {
    fn id(&self) -> Option<String> {
        Some(self.slug.to_string())
    }
}

fn listing(slug: &'static str, company: &'static str) -> Listing {
    Listing { slug, company }
}

fn page_one() -> Vec<Listing> {
    vec![
        listing("backend-intern", "acme"),
        listing("frontend-intern", "globex"),
        listing("data-intern", "initech"),
    ]
}

fn columns() -> Vec<Column<Listing>> {
    vec![
        Column::new("slug", "Position")
            .accessor(|l: &Listing| l.slug.into())
            .sortable(),
        Column::new("company", "Company").accessor(|l: &Listing| l.company.into()),
    ]
}

#[test]
fn test_delegated_pagination_requests_but_never_mutates() {
    let calls = Arc::new(AtomicUsize::new(0));
    let requested = Arc::new(Mutex::new(None::<PaginationState>));

    let grid = Grid::new(columns())
        .with_server_pagination(
            PaginationState {
                page_index: 0,
                page_size: 3,
            },
            4,
            {
                let calls = Arc::clone(&calls);
                let requested = Arc::clone(&requested);
                move |next| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    if let Ok(mut slot) = requested.lock() {
                        *slot = Some(*next);
                    }
                }
            },
        )
        .with_rows(page_one());

    // The request goes through the callback exactly once; the mirror does
    // not move until the caller syncs new state in.
    assert!(!grid.set_page_index(2));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(grid.page_index(), 0);
    let sent = requested.lock().ok().and_then(|s| *s);
    assert_eq!(sent.map(|p| p.page_index), Some(2));
}

#[test]
fn test_next_page_under_delegation_requests_increment() {
    let requested = Arc::new(Mutex::new(None::<PaginationState>));
    let grid = Grid::new(columns())
        .with_server_pagination(
            PaginationState {
                page_index: 1,
                page_size: 3,
            },
            4,
            {
                let requested = Arc::clone(&requested);
                move |next| {
                    if let Ok(mut slot) = requested.lock() {
                        *slot = Some(*next);
                    }
                }
            },
        )
        .with_rows(page_one());

    assert!(!grid.next_page());
    let sent = requested.lock().ok().and_then(|s| *s);
    assert_eq!(sent.map(|p| p.page_index), Some(2));
}

#[test]
fn test_sync_pagination_refreshes_mirror() {
    let grid = Grid::new(columns())
        .with_server_pagination(PaginationState::default(), 4, |_| {})
        .with_rows(page_one());

    grid.sync_pagination(
        PaginationState {
            page_index: 3,
            page_size: 10,
        },
        5,
    );
    assert_eq!(grid.page_index(), 3);
    assert_eq!(grid.page_count(), 5);
}

#[test]
fn test_sync_on_local_pagination_is_ignored() {
    let grid = Grid::new(columns()).with_page_size(2).with_rows(page_one());
    grid.sync_pagination(
        PaginationState {
            page_index: 7,
            page_size: 99,
        },
        42,
    );
    assert_eq!(grid.page_index(), 0);
    assert_eq!(grid.page_size(), 2);
    assert_eq!(grid.page_count(), 2);
}

#[test]
fn test_delegated_pagination_never_slices() {
    let grid = Grid::new(columns())
        .with_server_pagination(
            PaginationState {
                page_index: 0,
                page_size: 2,
            },
            4,
            |_| {},
        )
        .with_rows(page_one());

    // Three rows supplied, page size two: the supplied rows already are
    // the page.
    assert_eq!(grid.page_rows().len(), 3);
    assert_eq!(grid.page_count(), 4);
}

#[test]
fn test_filters_narrow_the_cached_page_under_delegation() {
    let grid = Grid::new(columns())
        .with_server_pagination(PaginationState::default(), 4, |_| {})
        .with_rows(page_one());

    grid.set_filter("company", FilterSpec::Equals("acme".to_string()));
    let view = grid.page_view();
    assert_eq!(view.ids, vec!["backend-intern"]);
    assert_eq!(view.filtered_len, 1);
    // Page count stays caller-supplied.
    assert_eq!(view.page_count, 4);
}

#[test]
fn test_delegated_sorting_requests_cycled_state() {
    let requested = Arc::new(Mutex::new(None::<SortState>));
    let grid = Grid::new(columns())
        .with_server_sorting(SortState::default(), {
            let requested = Arc::clone(&requested);
            move |next| {
                if let Ok(mut slot) = requested.lock() {
                    *slot = Some(next.clone());
                }
            }
        })
        .with_rows(page_one());

    let returned = grid.toggle_sort("slug");
    assert_eq!(
        returned.and_then(|s| s.direction_of("slug")),
        Some(SortDirection::Ascending)
    );
    let sent = requested.lock().ok().and_then(|s| s.clone());
    assert_eq!(
        sent.and_then(|s| s.direction_of("slug")),
        Some(SortDirection::Ascending)
    );
    // The mirror only moves on sync.
    assert!(grid.sort_state().is_unsorted());

    grid.sync_sorting(SortState(vec![ColumnSort {
        column: "slug".to_string(),
        direction: SortDirection::Ascending,
    }]));
    assert_eq!(
        grid.sort_state().direction_of("slug"),
        Some(SortDirection::Ascending)
    );
}

#[test]
fn test_delegated_sorting_does_not_reorder_rows() {
    let grid = Grid::new(columns())
        .with_server_sorting(
            SortState(vec![ColumnSort {
                column: "slug".to_string(),
                direction: SortDirection::Descending,
            }]),
            |_| {},
        )
        .with_rows(page_one());

    // The caller sorts; the supplied order is displayed as-is.
    assert_eq!(
        grid.page_view().ids,
        vec!["backend-intern", "frontend-intern", "data-intern"]
    );
}

#[test]
fn test_sync_on_local_sorting_is_ignored() {
    let grid = Grid::new(columns()).with_rows(page_one());
    grid.sync_sorting(SortState(vec![ColumnSort {
        column: "slug".to_string(),
        direction: SortDirection::Descending,
    }]));
    assert!(grid.sort_state().is_unsorted());
}

#[test]
fn test_page_size_request_under_delegation() {
    let requested = Arc::new(Mutex::new(None::<PaginationState>));
    let grid = Grid::new(columns())
        .with_server_pagination(
            PaginationState {
                page_index: 2,
                page_size: 3,
            },
            4,
            {
                let requested = Arc::clone(&requested);
                move |next| {
                    if let Ok(mut slot) = requested.lock() {
                        *slot = Some(*next);
                    }
                }
            },
        )
        .with_rows(page_one());

    assert!(!grid.set_page_size(25));
    let sent = requested.lock().ok().and_then(|s| *s);
    assert_eq!(sent.map(|p| p.page_size), Some(25));
    assert_eq!(grid.page_size(), 3);
}

#[test]
fn test_update_row_patches_cached_page() {
    let grid = Grid::new(columns())
        .with_server_pagination(PaginationState::default(), 4, |_| {})
        .with_rows(page_one());

    assert!(grid.update_row(0, listing("backend-intern", "acme corp")));
    assert_eq!(grid.row(0).map(|l| l.company), Some("acme corp"));
}

#[test]
fn test_snapshot_under_delegation_uses_supplied_page_count() {
    let grid = Grid::new(columns())
        .with_server_pagination(
            PaginationState {
                page_index: 1,
                page_size: 3,
            },
            7,
            |_| {},
        )
        .with_rows(page_one());

    let snapshot = grid.snapshot();
    assert_eq!(snapshot.page_count, 7);
    assert_eq!(snapshot.pagination.page_index, 1);
}

#[test]
fn test_ownership_accessors() {
    let local: Ownership<PaginationState> = Ownership::Local(PaginationState::default());
    assert!(!local.is_delegated());
    assert!(local.handler().is_none());

    let delegated: Ownership<PaginationState> = Ownership::Delegated {
        state: PaginationState::default(),
        on_change: Arc::new(|_| {}),
    };
    assert!(delegated.is_delegated());
    assert!(delegated.handler().is_some());
    assert_eq!(delegated.get().page_size, 10);
}
