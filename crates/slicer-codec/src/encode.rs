//! Tuple-filter construction and persistence.

use serde_json::Value;
use slicer_model::{
    FILTER_PROPERTY, FilterAction, FilterTarget, GENERAL_OBJECT, HierarchyDataPoint,
    LEGACY_FILTER_VALUES_PROPERTY, Result, SlicerHost, TupleCell, TupleFilter,
};

/// Build a tuple filter from the current selection and persist it.
///
/// Targets are restricted to levels `0..=levels`; unresolvable targets are
/// excluded from the target list. Rows come from fully selected nodes at
/// exactly the settled depth, skipping the synthetic select-all row. An
/// empty tree is a no-op; a non-empty tree with nothing selected at depth
/// clears any existing filter by persisting an empty merge.
///
/// Host failures propagate unchanged.
pub fn apply_filter<H: SlicerHost + ?Sized>(
    host: &mut H,
    tree: &[HierarchyDataPoint],
    column_targets: &[FilterTarget],
    levels: i32,
) -> Result<Option<TupleFilter>> {
    if tree.is_empty() {
        return Ok(None);
    }

    let depth = usize::try_from(levels).unwrap_or(0);
    let targets: Vec<FilterTarget> = column_targets
        .iter()
        .take(depth + 1)
        .filter(|target| !target.is_unresolved())
        .cloned()
        .collect();

    let rows: Vec<Vec<TupleCell>> = tree
        .iter()
        .filter(|point| !point.is_select_all())
        .filter(|point| point.selected && !point.partial_selected && point.level == levels)
        .map(|point| {
            point
                .value
                .iter()
                .map(|value| TupleCell {
                    value: Value::String(value.clone()),
                })
                .collect()
        })
        .collect();

    if rows.is_empty() {
        tracing::debug!("no complete selection at depth {levels}; clearing filter");
        persist_filter(host, &[], FilterAction::Merge)?;
        return Ok(None);
    }

    tracing::debug!(rows = rows.len(), levels, "persisting tuple filter");
    let filter = TupleFilter::new(targets, rows);
    persist_filter(host, std::slice::from_ref(&filter), FilterAction::Merge)?;
    Ok(Some(filter))
}

/// Persist filters through the host.
///
/// The deprecated `filterValues` property is removed before the filter is
/// applied, in that order: a host that applies filters eagerly on each call
/// must never observe both the old and new persisted state at once.
pub fn persist_filter<H: SlicerHost + ?Sized>(
    host: &mut H,
    filters: &[TupleFilter],
    action: FilterAction,
) -> Result<()> {
    host.remove_properties(GENERAL_OBJECT, LEGACY_FILTER_VALUES_PROPERTY)?;
    host.apply_json_filter(filters, GENERAL_OBJECT, FILTER_PROPERTY, action)
}
