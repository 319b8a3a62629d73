//! Top-level filter decoding.
//!
//! Rehydrates selection state from whatever the host hands back on a data
//! refresh: a modern JSON tuple filter, the stored advanced-filter condition
//! (when the tuple filter cannot carry per-level detail), or the deprecated
//! comma-encoded identifier string.

use serde_json::Value;
use slicer_model::{AppliedFilter, ColumnMetadata, FilterTarget, SelectionTuple, VisualMetadata};

use crate::advanced::advanced_filter_to_selection;
use crate::ident::parse_legacy_filter_values;
use crate::value::{coerce, format_value, type_of};

/// Reconstruct the selected tuples from the host's current filter state.
///
/// Dispatch order:
/// 1. A non-empty JSON filter decodes directly when the first column target
///    carries no hierarchy level. With hierarchy levels the JSON filter
///    lacks per-level detail (host limitation) and the stored
///    advanced-filter condition is used instead; absent that, the result is
///    empty.
/// 2. Without JSON filters, a non-empty legacy `filterValues` string decodes
///    through the old identifier format (documents saved before JSON
///    filters existed).
/// 3. Otherwise there is nothing to restore.
pub fn parse_filter(
    json_filters: Option<&[AppliedFilter]>,
    column_targets: &[FilterTarget],
    metadata: &VisualMetadata,
    filter_values: Option<&str>,
) -> Vec<SelectionTuple> {
    if let Some(filters) = json_filters.filter(|filters| !filters.is_empty()) {
        let hierarchical = column_targets
            .first()
            .is_some_and(|target| target.hierarchy_level.is_some());
        if !hierarchical {
            return decode_tuple_values(&filters[0], &metadata.columns);
        }
        let Some(condition) = metadata
            .objects
            .as_ref()
            .and_then(|objects| objects.advanced_condition())
        else {
            tracing::debug!("hierarchical filter without stored condition; nothing to restore");
            return Vec::new();
        };
        let columns = hierarchy_columns(metadata);
        return advanced_filter_to_selection(condition, &columns);
    }
    match filter_values {
        Some(values) if !values.is_empty() => parse_legacy_filter_values(values),
        _ => Vec::new(),
    }
}

/// Decode the value groups of a JSON tuple filter. Multi-level groups format
/// each element with its level's type and format; a scalar group is a
/// single level-0 value. Grouping commas in the output are left in place
/// here — only the advanced-filter path strips them.
fn decode_tuple_values(filter: &AppliedFilter, columns: &[ColumnMetadata]) -> Vec<SelectionTuple> {
    filter
        .values
        .iter()
        .map(|group| match group {
            Value::Array(cells) => cells
                .iter()
                .enumerate()
                .map(|(level, cell)| {
                    let (kind, format) = type_of(columns, level);
                    format_value(&coerce(cell_value(cell), kind, false), format)
                })
                .collect(),
            scalar => {
                let (kind, format) = type_of(columns, 0);
                vec![format_value(&coerce(cell_value(scalar), kind, false), format)]
            }
        })
        .collect()
}

/// A group element is either a bare scalar or a `{value}` cell.
fn cell_value(value: &Value) -> &Value {
    value.get("value").unwrap_or(value)
}

/// Metadata columns bound to the slicer's field role, in metadata order.
/// These are the definitions advanced-filter cells are matched against.
pub fn hierarchy_columns(metadata: &VisualMetadata) -> Vec<ColumnMetadata> {
    metadata
        .columns
        .iter()
        .filter(|column| column.has_fields_role())
        .cloned()
        .collect()
}
