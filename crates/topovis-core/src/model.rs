//! Output data model consumed by the rendering/layout layer.

use serde::{Deserialize, Serialize};

/// Hierarchical visualization model produced by [`crate::build_model`].
///
/// `nodes` contains one entry per input entity (in input order) followed by
/// one `group`-kind entry per group node (in first-seen order). `group_nodes`
/// lists the same groups with their grouping detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationModel {
    pub graph: GraphDescriptor,
    pub nodes: Vec<NodeModel>,
    pub group_nodes: Vec<GroupNode>,
    pub edges: Vec<EdgeModel>,
}

/// Top-level graph entry: id plus the name of the externally supplied layout
/// algorithm (layout itself is out of scope here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDescriptor {
    pub id: String,
    pub layout: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Node,
    Group,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeModel {
    pub id: String,
    pub kind: NodeKind,
    /// Fixed visual size for entity nodes; group nodes carry no size (the
    /// layout derives it from their members).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
}

/// A synthetic container node aggregating entities that share a grouping key.
///
/// `id` equals the grouping-key value. Nothing prevents that value from
/// colliding with an entity id; callers own id hygiene (see `builder`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupNode {
    pub id: String,
    pub label: String,
    /// Member entity ids, in first-seen order.
    pub children: Vec<String>,
    pub padding: f64,
    pub collapsible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeModel {
    pub id: String,
    pub source: String,
    pub target: String,
}
