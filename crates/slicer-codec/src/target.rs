//! Filter-target resolution from column query expressions.

use slicer_model::{CategoryColumn, FilterTarget, QueryExpr};

/// Determine the filter target a column maps to in the host data model.
///
/// Plain column references yield table/column; hierarchy-level references
/// yield a four-field target where the level name doubles as the column.
/// The backing table of a hierarchy level normally comes from the hierarchy
/// argument's entity, but hierarchies defined directly on a table may sit on
/// a generated virtual table (date hierarchies do), and the queryable table
/// name is then only recoverable from the column's identity expressions —
/// the last one's source entity wins when present.
///
/// Expressions no target can be derived from resolve to null fields; callers
/// exclude such levels from filtering rather than treat them as errors.
pub fn extract_filter_target(column: &CategoryColumn) -> FilterTarget {
    let Some(expr) = column.expression() else {
        return FilterTarget::unresolved();
    };
    match expr {
        QueryExpr::HierarchyLevel { arg, level } => {
            let Some(hierarchy) = arg.hierarchy_name() else {
                tracing::debug!(%level, "hierarchy level without a named hierarchy");
                return FilterTarget::unresolved();
            };
            let mut table = arg.argument_entity().map(str::to_string);
            if matches!(arg.as_ref(), QueryExpr::Hierarchy { .. }) {
                if let Some(entity) = column
                    .identity_exprs
                    .last()
                    .and_then(QueryExpr::source_entity)
                {
                    table = Some(entity.to_string());
                }
            }
            FilterTarget::hierarchy_level(table, hierarchy.to_string(), level.clone())
        }
        QueryExpr::ColumnRef { source, column } => FilterTarget::column(
            source.as_ref().and_then(|s| s.entity.clone()),
            column.clone(),
        ),
        other => {
            tracing::debug!(?other, "no filter target derivable from expression");
            FilterTarget::unresolved()
        }
    }
}
