//! Input data model: the flat entity graph delivered by the topology query
//! service.
//!
//! Entities are immutable input; the builder never retains or mutates them.

use serde::{Deserialize, Serialize};

/// A node in the source topology graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: String,
    pub kind: EntityKind,
}

/// Entity kind plus its kind-specific payload.
///
/// Unrecognized kinds are carried as [`EntityKind::Other`] and are never an
/// error: they degrade to an unlabeled, ungrouped node so renderers keep
/// working against forward-compatible payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    Deployment(Deployment),
    Internet,
    ExternalSource(ExternalSource),
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub name: String,
    pub namespace: String,
    pub cluster: String,
    #[serde(default)]
    pub listen_ports: Vec<ListenPort>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListenPort {
    pub port: u16,
    pub l4protocol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalSource {
    pub name: String,
    pub cidr: String,
    #[serde(default)]
    pub default: bool,
}

/// One observed flow over an adjacency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowProperty {
    pub port: u16,
    pub protocol: String,
    pub last_active_timestamp: String,
}

/// A directed adjacency from the carrying entity to another entity.
///
/// `target` indexes into the *original input sequence*, not into ids; the
/// builder resolves it before emitting an edge.
#[derive(Debug, Clone, PartialEq)]
pub struct OutEdge {
    pub target: usize,
    pub properties: Vec<FlowProperty>,
}

/// An entity together with its out-edges and per-node flow metadata.
///
/// The metadata fields (`internet_access`, `policy_ids`, ...) pass through
/// from the query response untouched; the transform does not consult them.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEntity {
    pub entity: Entity,
    pub out_edges: Vec<OutEdge>,
    pub internet_access: bool,
    pub policy_ids: Vec<String>,
    pub non_isolated_ingress: bool,
    pub non_isolated_egress: bool,
    pub query_match: bool,
}

impl GraphEntity {
    pub fn new(entity: Entity, out_edges: Vec<OutEdge>) -> Self {
        Self {
            entity,
            out_edges,
            internet_access: false,
            policy_ids: Vec::new(),
            non_isolated_ingress: false,
            non_isolated_egress: false,
            query_match: false,
        }
    }
}

impl Entity {
    pub fn new(id: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    /// Display label for the node derived from this entity.
    ///
    /// Deployments use their name, internet egress the literal `"Internet"`,
    /// external sources their name. Unknown kinds yield an empty label.
    pub fn label(&self) -> &str {
        match &self.kind {
            EntityKind::Deployment(d) => &d.name,
            EntityKind::Internet => "Internet",
            EntityKind::ExternalSource(s) => &s.name,
            EntityKind::Other(_) => "",
        }
    }

    /// The attribute this entity is visually grouped by, if it carries one.
    ///
    /// Today only deployments group (by namespace).
    pub fn grouping_key(&self) -> Option<&str> {
        match &self.kind {
            EntityKind::Deployment(d) => Some(&d.namespace),
            _ => None,
        }
    }
}
