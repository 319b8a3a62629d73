use serde::{Deserialize, Serialize};

/// One decoded selection path, root to the selection's depth, as formatted
/// display strings. Order across tuples follows the filter's internal order.
pub type SelectionTuple = Vec<String>;

/// Identifier head of the synthetic select-all node.
pub const SELECT_ALL_ID: &str = "selectAll";

/// Fields of a tree node the codec reads. The tree component owns these
/// points; the codec never mutates them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyDataPoint {
    pub level: i32,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub partial_selected: bool,
    /// Per-level stored values, already typed for the wire.
    #[serde(default)]
    pub value: Vec<String>,
    /// Path components identifying the node.
    #[serde(default)]
    pub own_id: Vec<String>,
}

impl HierarchyDataPoint {
    /// True for the synthetic select-all row, which never participates in
    /// filter payloads.
    pub fn is_select_all(&self) -> bool {
        self.own_id.first().is_some_and(|id| id == SELECT_ALL_ID)
    }
}
