//! Reconstruction of selection state from a stored advanced-filter
//! condition tree.
//!
//! The condition carries parallel `args` (the column descriptors the filter
//! expression was built over) and `values` (rows of raw cells). Neither is
//! guaranteed to be positionally aligned with the visual's column
//! definitions, so each cell is re-matched against the definitions and rows
//! are re-sorted into definition order before they are emitted.

use slicer_model::{AdvancedCondition, ColumnMetadata, QueryExpr, SelectionTuple};

use crate::value::{GENERAL_FORMAT, coerce, format_value};

/// Convert a stored advanced-filter condition into selection tuples.
///
/// Unmatched cells are dropped silently. A null raw cell additionally
/// contributes a lone `[""]` row to the result while the row it belongs to
/// keeps building — saved documents from the era of this filter shape rely
/// on that quirk, so it is reproduced rather than normalized.
pub fn advanced_filter_to_selection(
    condition: &AdvancedCondition,
    column_defs: &[ColumnMetadata],
) -> Vec<SelectionTuple> {
    let args = &condition.args;
    let mut result: Vec<SelectionTuple> = Vec::new();
    for row in &condition.values {
        let mut matched: Vec<(usize, String)> = Vec::new();
        for (index, cell) in row.iter().enumerate() {
            if cell.value.is_null() {
                result.push(vec![String::new()]);
            }
            let Some(arg) = args.get(index) else {
                continue;
            };
            let Some(position) = matching_definition(column_defs, arg) else {
                tracing::debug!(index, "cell matches no column definition; dropped");
                continue;
            };
            let def = &column_defs[position];
            let typed = coerce(&cell.value, def.kind.unwrap_or_default(), false);
            let label = format_value(&typed, def.format.as_deref().unwrap_or(GENERAL_FORMAT));
            matched.push((position, label.replace(',', "")));
        }
        matched.sort_by_key(|(position, _)| *position);
        result.push(matched.into_iter().map(|(_, label)| label).collect());
    }
    result
}

/// Index of the column definition whose expression matches a filter
/// argument. Both sides compare by (column-or-level name, entity-or-hierarchy
/// name), so a definition expressed against a source entity still matches an
/// argument expressed through its enclosing hierarchy.
fn matching_definition(column_defs: &[ColumnMetadata], arg: &QueryExpr) -> Option<usize> {
    let arg_key = arg.match_key()?;
    column_defs.iter().position(|def| {
        def.expr
            .as_ref()
            .and_then(QueryExpr::match_key)
            .is_some_and(|def_key| def_key == arg_key)
    })
}
