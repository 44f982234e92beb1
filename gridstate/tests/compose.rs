use gridstate::prelude::*;

#[derive(Clone)]
struct Item {
    name: &'static str,
}

impl GridRow for Item {
    fn id(&self) -> Option<String> {
        Some(self.name.to_string())
    }
}

fn base() -> Vec<Column<Item>> {
    vec![
        Column::new("name", "Name"),
        Column::new("role", "Role"),
        Column::new("score", "Score"),
    ]
}

fn ids<T>(columns: &[Column<T>]) -> Vec<&str> {
    columns.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn test_compose_no_flags_keeps_base() {
    let columns = compose_columns(&base(), FeatureFlags::default());
    assert_eq!(ids(&columns), vec!["name", "role", "score"]);
}

#[test]
fn test_compose_selection_only() {
    let flags = FeatureFlags {
        selection: true,
        ..Default::default()
    };
    let columns = compose_columns(&base(), flags);
    assert_eq!(ids(&columns), vec![SELECT_COLUMN, "name", "role", "score"]);
}

#[test]
fn test_compose_expansion_only() {
    let flags = FeatureFlags {
        expansion: true,
        ..Default::default()
    };
    let columns = compose_columns(&base(), flags);
    assert_eq!(ids(&columns), vec![EXPAND_COLUMN, "name", "role", "score"]);
}

#[test]
fn test_compose_selection_and_expansion_combine() {
    let flags = FeatureFlags {
        selection: true,
        expansion: true,
        ..Default::default()
    };
    let columns = compose_columns(&base(), flags);
    assert_eq!(
        ids(&columns),
        vec![SELECT_EXPAND_COLUMN, "name", "role", "score"]
    );
    assert!(!columns.iter().any(|c| c.id == SELECT_COLUMN));
    assert!(!columns.iter().any(|c| c.id == EXPAND_COLUMN));
}

#[test]
fn test_compose_row_reorder_appends_drag_handle() {
    let flags = FeatureFlags {
        row_reorder: true,
        ..Default::default()
    };
    let columns = compose_columns(&base(), flags);
    assert_eq!(ids(&columns), vec!["name", "role", "score", DRAG_COLUMN]);
}

#[test]
fn test_compose_all_flags() {
    let flags = FeatureFlags {
        selection: true,
        expansion: true,
        row_reorder: true,
        column_reorder: true,
        editing: true,
    };
    let columns = compose_columns(&base(), flags);
    assert_eq!(
        ids(&columns),
        vec![SELECT_EXPAND_COLUMN, "name", "role", "score", DRAG_COLUMN]
    );
    // Base columns exactly once each, original relative order.
    for id in ["name", "role", "score"] {
        assert_eq!(columns.iter().filter(|c| c.id == id).count(), 1);
    }
}

#[test]
fn test_structural_columns_not_sortable_not_exported() {
    let flags = FeatureFlags {
        selection: true,
        row_reorder: true,
        ..Default::default()
    };
    let columns = compose_columns(&base(), flags);
    for column in columns.iter().filter(|c| c.is_structural()) {
        assert!(!column.sortable);
        assert!(!column.export.allows(ExportFormat::Csv));
        assert!(!column.export.allows(ExportFormat::Pdf));
    }
}

#[test]
fn test_compose_is_stable_across_recomputation() {
    let flags = FeatureFlags {
        selection: true,
        row_reorder: true,
        ..Default::default()
    };
    let first = compose_columns(&base(), flags);
    let second = compose_columns(&base(), flags);
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn test_structural_id_predicate() {
    assert!(is_structural_id(SELECT_COLUMN));
    assert!(is_structural_id(EXPAND_COLUMN));
    assert!(is_structural_id(SELECT_EXPAND_COLUMN));
    assert!(is_structural_id(DRAG_COLUMN));
    assert!(!is_structural_id("name"));
}

#[test]
fn test_reconcile_preserves_user_order() {
    let prior = vec!["role".to_string(), "name".to_string(), "score".to_string()];
    let composed = compose_columns(&base(), FeatureFlags::default());
    assert_eq!(
        gridstate::compose::reconcile_order(&prior, &composed),
        vec!["role", "name", "score"]
    );
}

#[test]
fn test_reconcile_pins_new_structural_columns_to_edges() {
    let prior = vec!["role".to_string(), "name".to_string(), "score".to_string()];
    let flags = FeatureFlags {
        selection: true,
        row_reorder: true,
        ..Default::default()
    };
    let composed = compose_columns(&base(), flags);
    assert_eq!(
        gridstate::compose::reconcile_order(&prior, &composed),
        vec![SELECT_COLUMN, "role", "name", "score", DRAG_COLUMN]
    );
}

#[test]
fn test_reconcile_drops_removed_ids() {
    let prior = vec![
        "ghost".to_string(),
        "score".to_string(),
        "name".to_string(),
    ];
    let composed = compose_columns(&base(), FeatureFlags::default());
    let order = gridstate::compose::reconcile_order(&prior, &composed);
    assert!(!order.iter().any(|id| id == "ghost"));
    // "role" is new relative to prior; it slots in after its composed
    // predecessor "name".
    assert_eq!(order, vec!["score", "name", "role"]);
}
