use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::expr::QueryExpr;
use crate::filter::VisualObjects;
use crate::value::DataKind;

/// Role under which slicer field columns are bound.
pub const FIELDS_ROLE: &str = "Fields";

/// One column of the host metadata, positionally aligned with tree depth.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMetadata {
    pub display_name: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<DataKind>,
    #[serde(default)]
    pub roles: BTreeMap<String, bool>,
    #[serde(default)]
    pub expr: Option<QueryExpr>,
}

impl ColumnMetadata {
    /// True when the column is bound to the slicer's field role.
    pub fn has_fields_role(&self) -> bool {
        self.roles.get(FIELDS_ROLE).copied().unwrap_or(false)
    }
}

/// A category column as handed over by the host: the metadata column is
/// nested under `source`, with identity expressions alongside. Bare metadata
/// columns carry their expression directly instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryColumn {
    #[serde(default)]
    pub source: Option<ColumnMetadata>,
    #[serde(default)]
    pub expr: Option<QueryExpr>,
    #[serde(default)]
    pub identity_exprs: Vec<QueryExpr>,
}

impl CategoryColumn {
    /// The query expression to resolve, preferring the nested source
    /// expression over the direct one.
    pub fn expression(&self) -> Option<&QueryExpr> {
        self.source
            .as_ref()
            .and_then(|source| source.expr.as_ref())
            .or_else(|| self.expr.as_ref())
    }
}

/// Metadata for the visual's current data view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualMetadata {
    #[serde(default)]
    pub columns: Vec<ColumnMetadata>,
    #[serde(default)]
    pub objects: Option<VisualObjects>,
}
