//! Tests for slicer-model wire shapes.

use serde_json::json;
use slicer_model::{FilterTarget, QueryExpr, TupleCell, TupleFilter, VisualMetadata};

#[test]
fn tuple_filter_wire_shape() {
    let filter = TupleFilter::new(
        vec![FilterTarget::column(
            Some("Sales".to_string()),
            Some("Region".to_string()),
        )],
        vec![vec![TupleCell {
            value: json!("North"),
        }]],
    );
    let wire = serde_json::to_value(&filter).expect("serialize filter");
    assert_eq!(wire["$schema"], "http://powerbi.com/product/schema#tuple");
    assert_eq!(wire["filterType"], 6);
    assert_eq!(wire["operator"], "In");
    assert_eq!(wire["target"][0]["table"], "Sales");
    assert_eq!(wire["values"][0][0]["value"], "North");
}

#[test]
fn hierarchy_target_serializes_camel_case() {
    let target = FilterTarget::hierarchy_level(
        Some("LocalDateTable_1".to_string()),
        "Date Hierarchy".to_string(),
        "Year".to_string(),
    );
    let wire = serde_json::to_value(&target).expect("serialize target");
    assert_eq!(wire["hierarchy"], "Date Hierarchy");
    assert_eq!(wire["hierarchyLevel"], "Year");
    assert_eq!(wire["column"], "Year");
}

#[test]
fn plain_target_omits_absent_hierarchy_fields() {
    let target = FilterTarget::column(Some("Sales".to_string()), Some("Region".to_string()));
    let wire = serde_json::to_value(&target).expect("serialize target");
    assert!(wire.get("hierarchy").is_none());
    assert!(wire.get("hierarchyLevel").is_none());
}

#[test]
fn query_expr_deserializes_by_kind_tag() {
    let expr: QueryExpr = serde_json::from_value(json!({
        "kind": "HierarchyLevel",
        "level": "Month",
        "arg": { "kind": "Hierarchy", "hierarchy": "Calendar", "arg": { "entity": "Dates" } },
    }))
    .expect("deserialize expr");
    match expr {
        QueryExpr::HierarchyLevel { ref arg, ref level } => {
            assert_eq!(level, "Month");
            assert_eq!(arg.hierarchy_name(), Some("Calendar"));
            assert_eq!(arg.argument_entity(), Some("Dates"));
        }
        other => panic!("unexpected expr: {other:?}"),
    }
}

#[test]
fn unknown_expr_kind_collapses_to_other() {
    let expr: QueryExpr =
        serde_json::from_value(json!({ "kind": "Aggregation" })).expect("deserialize expr");
    assert_eq!(expr, QueryExpr::Other);
    assert!(expr.match_key().is_none());
}

#[test]
fn stored_condition_is_reachable_through_objects() {
    let metadata: VisualMetadata = serde_json::from_value(json!({
        "columns": [],
        "objects": {
            "general": {
                "filter": {
                    "whereItems": [
                        { "condition": { "args": [], "values": [[{ "value": "A" }]] } }
                    ]
                }
            }
        }
    }))
    .expect("deserialize metadata");
    let condition = metadata
        .objects
        .as_ref()
        .and_then(|objects| objects.advanced_condition())
        .expect("condition present");
    assert_eq!(condition.values.len(), 1);
}
