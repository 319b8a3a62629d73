use serde::{Deserialize, Serialize};

/// Reference to a concrete entity (table) in the host data model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    #[serde(default)]
    pub entity: Option<String>,
}

/// Query expression attached to a column by the host, discriminated by its
/// `kind` tag.
///
/// The host's expression language is larger than this; only the shapes the
/// codec resolves are modeled, everything else collapses into [`QueryExpr::Other`]
/// and yields no filter target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum QueryExpr {
    /// Plain reference to a table column.
    ColumnRef {
        #[serde(default)]
        source: Option<SourceRef>,
        #[serde(rename = "ref", default)]
        column: Option<String>,
    },
    /// A hierarchy defined directly on a table.
    Hierarchy {
        #[serde(default)]
        arg: Option<SourceRef>,
        hierarchy: String,
    },
    /// A hierarchy synthesized from a column variation (date-derived
    /// hierarchies live on generated virtual tables).
    Variation {
        #[serde(default)]
        arg: Option<SourceRef>,
        hierarchy: String,
    },
    /// One level of a hierarchy; `arg` names the hierarchy it belongs to.
    HierarchyLevel { arg: Box<QueryExpr>, level: String },
    #[serde(other)]
    Other,
}

impl QueryExpr {
    /// Name of the hierarchy this expression refers to, if any.
    pub fn hierarchy_name(&self) -> Option<&str> {
        match self {
            QueryExpr::Hierarchy { hierarchy, .. } | QueryExpr::Variation { hierarchy, .. } => {
                Some(hierarchy)
            }
            _ => None,
        }
    }

    /// Entity of the argument one step down, used to recover the backing
    /// table of a hierarchy expression.
    pub fn argument_entity(&self) -> Option<&str> {
        match self {
            QueryExpr::Hierarchy { arg, .. } | QueryExpr::Variation { arg, .. } => {
                arg.as_ref().and_then(|source| source.entity.as_deref())
            }
            _ => None,
        }
    }

    /// Entity of a direct source reference (plain column expressions).
    pub fn source_entity(&self) -> Option<&str> {
        match self {
            QueryExpr::ColumnRef { source, .. } => {
                source.as_ref().and_then(|s| s.entity.as_deref())
            }
            _ => None,
        }
    }

    /// Identity used to align stored filter arguments with column
    /// definitions: (column-or-level name, entity-or-hierarchy name).
    ///
    /// Either side of a comparison may express its table through a direct
    /// source entity or through an enclosing hierarchy argument; this key
    /// normalizes both forms.
    pub fn match_key(&self) -> Option<(&str, &str)> {
        match self {
            QueryExpr::ColumnRef { source, column } => {
                let column = column.as_deref()?;
                let entity = source.as_ref().and_then(|s| s.entity.as_deref())?;
                Some((column, entity))
            }
            QueryExpr::HierarchyLevel { arg, level } => {
                Some((level.as_str(), arg.hierarchy_name()?))
            }
            _ => None,
        }
    }
}
