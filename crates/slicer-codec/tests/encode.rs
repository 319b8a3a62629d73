//! Encoder and persistence-ordering tests.

use serde_json::json;
use slicer_codec::{apply_filter, persist_filter};
use slicer_model::{
    FilterAction, FilterTarget, HierarchyDataPoint, Result, SlicerError, SlicerHost, TupleFilter,
};

#[derive(Debug, PartialEq)]
enum HostCall {
    Removed {
        object: String,
        property: String,
    },
    Applied {
        filters: Vec<TupleFilter>,
        object: String,
        property: String,
        action: FilterAction,
    },
}

#[derive(Default)]
struct RecordingHost {
    calls: Vec<HostCall>,
    fail_removal: bool,
}

impl SlicerHost for RecordingHost {
    fn remove_properties(&mut self, object_name: &str, property_name: &str) -> Result<()> {
        if self.fail_removal {
            return Err(SlicerError::Host {
                object: object_name.to_string(),
                property: property_name.to_string(),
                message: "rejected".to_string(),
            });
        }
        self.calls.push(HostCall::Removed {
            object: object_name.to_string(),
            property: property_name.to_string(),
        });
        Ok(())
    }

    fn apply_json_filter(
        &mut self,
        filters: &[TupleFilter],
        object_name: &str,
        property_name: &str,
        action: FilterAction,
    ) -> Result<()> {
        self.calls.push(HostCall::Applied {
            filters: filters.to_vec(),
            object: object_name.to_string(),
            property: property_name.to_string(),
            action,
        });
        Ok(())
    }
}

fn point(level: i32, selected: bool, partial: bool, values: &[&str]) -> HierarchyDataPoint {
    HierarchyDataPoint {
        level,
        selected,
        partial_selected: partial,
        value: values.iter().map(|v| v.to_string()).collect(),
        own_id: values.iter().map(|v| v.to_string()).collect(),
    }
}

fn targets() -> Vec<FilterTarget> {
    vec![
        FilterTarget::column(Some("Geo".to_string()), Some("Region".to_string())),
        FilterTarget::column(Some("Geo".to_string()), Some("City".to_string())),
    ]
}

#[test]
fn empty_tree_is_a_no_op() {
    let mut host = RecordingHost::default();
    let result = apply_filter(&mut host, &[], &targets(), 0).expect("no host error");
    assert!(result.is_none());
    assert!(host.calls.is_empty());
}

#[test]
fn empty_selection_clears_with_merge_after_legacy_removal() {
    let mut host = RecordingHost::default();
    let tree = [point(0, false, true, &["Europe"])];
    let result = apply_filter(&mut host, &tree, &targets(), 0).expect("no host error");
    assert!(result.is_none());
    assert_eq!(
        host.calls,
        vec![
            HostCall::Removed {
                object: "general".to_string(),
                property: "filterValues".to_string(),
            },
            HostCall::Applied {
                filters: vec![],
                object: "general".to_string(),
                property: "filter".to_string(),
                action: FilterAction::Merge,
            },
        ]
    );
}

#[test]
fn selected_leaves_become_tuple_rows() {
    let mut host = RecordingHost::default();
    let tree = [
        point(0, false, true, &["Europe"]),
        point(1, true, false, &["Europe", "Berlin"]),
        point(1, true, false, &["Europe", "Paris"]),
        point(1, false, false, &["Europe", "Rome"]),
    ];
    let filter = apply_filter(&mut host, &tree, &targets(), 1)
        .expect("no host error")
        .expect("filter built");
    let wire = serde_json::to_value(&filter).expect("serialize");
    assert_eq!(wire["filterType"], 6);
    assert_eq!(wire["operator"], "In");
    assert_eq!(
        wire["values"],
        json!([
            [{ "value": "Europe" }, { "value": "Berlin" }],
            [{ "value": "Europe" }, { "value": "Paris" }],
        ])
    );
    assert_eq!(wire["target"].as_array().map(Vec::len), Some(2));
    // removal strictly precedes application
    assert!(matches!(host.calls[0], HostCall::Removed { .. }));
    assert!(matches!(host.calls[1], HostCall::Applied { .. }));
}

#[test]
fn deeper_and_partial_nodes_are_excluded() {
    let mut host = RecordingHost::default();
    let tree = [
        point(0, true, true, &["Europe"]),
        point(1, true, false, &["Europe", "Berlin"]),
    ];
    // level 0 is partially selected, so nothing settles at depth 0
    let result = apply_filter(&mut host, &tree, &targets(), 0).expect("no host error");
    assert!(result.is_none());
}

#[test]
fn select_all_row_never_reaches_the_payload() {
    let mut host = RecordingHost::default();
    let mut select_all = point(0, true, false, &["Everything"]);
    select_all.own_id = vec!["selectAll".to_string()];
    let tree = [select_all, point(0, true, false, &["Europe"])];
    let filter = apply_filter(&mut host, &tree, &targets(), 0)
        .expect("no host error")
        .expect("filter built");
    assert_eq!(filter.values.len(), 1);
    assert_eq!(filter.values[0][0].value, json!("Europe"));
}

#[test]
fn unresolved_targets_are_excluded_from_the_target_list() {
    let mut host = RecordingHost::default();
    let tree = [point(1, true, false, &["Europe", "Berlin"])];
    let targets = vec![
        FilterTarget::column(Some("Geo".to_string()), Some("Region".to_string())),
        FilterTarget::unresolved(),
    ];
    let filter = apply_filter(&mut host, &tree, &targets, 1)
        .expect("no host error")
        .expect("filter built");
    assert_eq!(filter.target.len(), 1);
}

#[test]
fn host_failure_propagates_before_the_filter_is_applied() {
    let mut host = RecordingHost {
        fail_removal: true,
        ..RecordingHost::default()
    };
    let tree = [point(0, true, false, &["Europe"])];
    let error = apply_filter(&mut host, &tree, &targets(), 0).expect_err("removal fails");
    assert!(matches!(error, SlicerError::Host { .. }));
    assert!(host.calls.is_empty());
}

#[test]
fn persist_orders_removal_before_application() {
    let mut host = RecordingHost::default();
    persist_filter(&mut host, &[], FilterAction::Remove).expect("no host error");
    assert_eq!(host.calls.len(), 2);
    assert!(matches!(
        host.calls[0],
        HostCall::Removed { ref property, .. } if property == "filterValues"
    ));
    assert!(matches!(
        host.calls[1],
        HostCall::Applied { action: FilterAction::Remove, .. }
    ));
}
