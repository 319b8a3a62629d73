use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::expr::QueryExpr;

/// Object holding both the modern filter and the deprecated string property.
pub const GENERAL_OBJECT: &str = "general";
/// Property the tuple filter is persisted under.
pub const FILTER_PROPERTY: &str = "filter";
/// Deprecated property that held comma-encoded identifiers.
pub const LEGACY_FILTER_VALUES_PROPERTY: &str = "filterValues";

/// Schema tag identifying a tuple filter on the wire.
pub const TUPLE_FILTER_SCHEMA: &str = "http://powerbi.com/product/schema#tuple";
/// Wire discriminant for tuple filters.
pub const TUPLE_FILTER_TYPE: u32 = 6;

/// How the host combines a persisted filter with existing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterAction {
    Merge,
    Remove,
}

/// Identifies the table/column (or hierarchy level) a tree level filters on.
///
/// `hierarchy` and `hierarchy_level` are both present or both absent; the
/// constructors are the only way this type is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterTarget {
    pub table: Option<String>,
    pub column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy_level: Option<String>,
}

impl FilterTarget {
    /// Target for a plain table column.
    pub fn column(table: Option<String>, column: Option<String>) -> Self {
        Self {
            table,
            column,
            hierarchy: None,
            hierarchy_level: None,
        }
    }

    /// Target for one level of a hierarchy. The level name doubles as the
    /// column name on the wire.
    pub fn hierarchy_level(table: Option<String>, hierarchy: String, level: String) -> Self {
        Self {
            table,
            column: Some(level.clone()),
            hierarchy: Some(hierarchy),
            hierarchy_level: Some(level),
        }
    }

    /// Target for a level no filter can be derived for.
    pub fn unresolved() -> Self {
        Self::column(None, None)
    }

    /// True when neither table nor column could be determined.
    pub fn is_unresolved(&self) -> bool {
        self.table.is_none() && self.column.is_none()
    }
}

/// One element of a tuple-filter row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TupleCell {
    pub value: Value,
}

/// The host's wire-level tuple filter. Constructed fresh on every encode and
/// handed to the host; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TupleFilter {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub target: Vec<FilterTarget>,
    pub filter_type: u32,
    pub operator: String,
    pub values: Vec<Vec<TupleCell>>,
}

impl TupleFilter {
    pub fn new(target: Vec<FilterTarget>, values: Vec<Vec<TupleCell>>) -> Self {
        Self {
            schema: TUPLE_FILTER_SCHEMA.to_string(),
            target,
            filter_type: TUPLE_FILTER_TYPE,
            operator: "In".to_string(),
            values,
        }
    }
}

/// A filter as handed back by the host on data refresh. Value groups are
/// either arrays of `{value}` cells (multi-level tuples) or bare scalars.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppliedFilter {
    #[serde(default)]
    pub values: Vec<Value>,
}

/// A raw value cell of a stored advanced-filter condition. Missing values
/// deserialize as JSON null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCell {
    #[serde(default)]
    pub value: Value,
}

/// Condition tree of the legacy advanced filter: `args` describe the columns
/// used in the expression, `values` carry rows of raw cells positionally
/// aligned with `args` (not with the column definition list).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvancedCondition {
    #[serde(default)]
    pub args: Vec<QueryExpr>,
    #[serde(default)]
    pub values: Vec<Vec<RawCell>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhereItem {
    #[serde(default)]
    pub condition: Option<AdvancedCondition>,
}

/// Legacy advanced filter stored in the visual's general object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFilter {
    #[serde(default)]
    pub where_items: Vec<WhereItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralObject {
    #[serde(default)]
    pub filter: Option<StoredFilter>,
    #[serde(default)]
    pub filter_values: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualObjects {
    #[serde(default)]
    pub general: Option<GeneralObject>,
}

impl VisualObjects {
    /// The first stored advanced-filter condition, when one exists.
    pub fn advanced_condition(&self) -> Option<&AdvancedCondition> {
        self.general
            .as_ref()?
            .filter
            .as_ref()?
            .where_items
            .first()?
            .condition
            .as_ref()
    }
}
