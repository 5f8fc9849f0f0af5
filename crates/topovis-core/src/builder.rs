//! Flat entity list -> hierarchical visualization model.

use indexmap::IndexMap;

use crate::entities::GraphEntity;
use crate::error::{Error, Result};
use crate::geom::{Size, size};
use crate::model::{
    EdgeModel, GraphDescriptor, GroupNode, NodeKind, NodeModel, VisualizationModel,
};

/// Default fixed size of entity nodes, in px.
pub const DEFAULT_NODE_SIZE: f64 = 75.0;

/// Default padding applied inside group nodes, in px.
pub const DEFAULT_GROUP_PADDING: f64 = 15.0;

/// How edge ids are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeIdScheme {
    /// `source ++ target` (no delimiter). Matches the historical id format.
    ///
    /// Two adjacency entries for the same (source, target) pair yield the
    /// same id, and ids are ambiguous when one id is a prefix of another.
    /// Collisions are kept as-is, never deduplicated.
    #[default]
    Concatenated,
    /// `source--target--seq` with a running sequence number. Collision-free,
    /// but not compatible with the historical format.
    Surrogate,
}

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub graph_id: String,
    /// Name of the layout algorithm the rendering layer should apply.
    pub layout: String,
    pub node_size: Size,
    pub group_padding: f64,
    pub edge_ids: EdgeIdScheme,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            graph_id: "topology-graph".to_string(),
            layout: "Concentric".to_string(),
            node_size: size(DEFAULT_NODE_SIZE, DEFAULT_NODE_SIZE),
            group_padding: DEFAULT_GROUP_PADDING,
            edge_ids: EdgeIdScheme::default(),
        }
    }
}

/// Builds the visualization model for a flat entity graph.
///
/// Input order is semantic: it determines node order and the first-seen
/// order of group nodes. Group nodes are appended after all entity nodes.
///
/// Fails with [`Error::InvalidReference`] when an out-edge targets an index
/// outside `entities`; a dangling edge would otherwise reference a
/// nonexistent node.
pub fn build_model(entities: &[GraphEntity], options: &BuildOptions) -> Result<VisualizationModel> {
    let mut nodes: Vec<NodeModel> = Vec::with_capacity(entities.len());
    let mut groups: IndexMap<String, GroupNode> = IndexMap::new();
    let mut edges: Vec<EdgeModel> = Vec::new();

    for item in entities {
        let entity = &item.entity;

        nodes.push(NodeModel {
            id: entity.id.clone(),
            kind: NodeKind::Node,
            width: Some(options.node_size.width),
            height: Some(options.node_size.height),
            label: entity.label().to_string(),
            children: None,
        });

        if let Some(key) = entity.grouping_key() {
            groups
                .entry(key.to_string())
                .or_insert_with(|| GroupNode {
                    id: key.to_string(),
                    label: key.to_string(),
                    children: Vec::new(),
                    padding: options.group_padding,
                    collapsible: true,
                })
                .children
                .push(entity.id.clone());
        }

        for out_edge in &item.out_edges {
            let target = entities
                .get(out_edge.target)
                .ok_or_else(|| Error::InvalidReference {
                    source_id: entity.id.clone(),
                    index: out_edge.target,
                    len: entities.len(),
                })?;
            let target_id = &target.entity.id;
            let id = match options.edge_ids {
                EdgeIdScheme::Concatenated => format!("{}{}", entity.id, target_id),
                EdgeIdScheme::Surrogate => {
                    format!("{}--{}--{}", entity.id, target_id, edges.len())
                }
            };
            edges.push(EdgeModel {
                id,
                source: entity.id.clone(),
                target: target_id.clone(),
            });
        }
    }

    // Group nodes go to the end of the node sequence, in creation order.
    for group in groups.values() {
        nodes.push(NodeModel {
            id: group.id.clone(),
            kind: NodeKind::Group,
            width: None,
            height: None,
            label: group.label.clone(),
            children: Some(group.children.clone()),
        });
    }

    tracing::debug!(
        entities = entities.len(),
        groups = groups.len(),
        edges = edges.len(),
        "built visualization model"
    );

    Ok(VisualizationModel {
        graph: GraphDescriptor {
            id: options.graph_id.clone(),
            layout: options.layout.clone(),
        },
        nodes,
        group_nodes: groups.into_values().collect(),
        edges,
    })
}
