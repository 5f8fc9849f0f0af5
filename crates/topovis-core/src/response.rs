//! Decoding of the topology query-service response payload.
//!
//! The wire shape is the service's JSON: `nodes[].entity` is internally
//! tagged on `"type"`, and `outEdges` is an object keyed by the stringified
//! index of the target node within `nodes`. Object order is preserved so the
//! resulting edge order matches the service's.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::entities::{
    Deployment, Entity, EntityKind, ExternalSource, FlowProperty, GraphEntity, OutEdge,
};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphResponse {
    #[serde(default)]
    pub epoch: u64,
    pub nodes: Vec<ResponseNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseNode {
    pub entity: ResponseEntity,
    #[serde(default)]
    pub internet_access: bool,
    #[serde(default)]
    pub policy_ids: Vec<String>,
    #[serde(default)]
    pub non_isolated_ingress: bool,
    #[serde(default)]
    pub non_isolated_egress: bool,
    #[serde(default)]
    pub query_match: bool,
    #[serde(default)]
    pub out_edges: IndexMap<String, OutEdgeProperties>,
}

/// Wire entity. Kind payloads are optional on the wire; an entity whose
/// declared kind is missing its payload degrades to [`EntityKind::Other`]
/// the same way an unrecognized kind does.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEntity {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<Deployment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_source: Option<ExternalSource>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutEdgeProperties {
    #[serde(default)]
    pub properties: Vec<FlowProperty>,
}

impl ResponseEntity {
    fn into_entity(self) -> Entity {
        let Self {
            kind,
            id,
            deployment,
            external_source,
        } = self;

        let kind = if kind == "DEPLOYMENT" {
            match deployment {
                Some(d) => EntityKind::Deployment(d),
                None => EntityKind::Other(kind),
            }
        } else if kind == "INTERNET" {
            EntityKind::Internet
        } else if kind == "EXTERNAL_SOURCE" {
            match external_source {
                Some(s) => EntityKind::ExternalSource(s),
                None => EntityKind::Other(kind),
            }
        } else {
            EntityKind::Other(kind)
        };

        Entity { id, kind }
    }
}

impl GraphResponse {
    /// Converts the decoded response into builder input, resolving the
    /// stringified out-edge keys into validated entity indexes.
    pub fn into_entities(self) -> Result<Vec<GraphEntity>> {
        let len = self.nodes.len();
        let entities = self
            .nodes
            .into_iter()
            .map(|node| node.into_graph_entity(len))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(entities = entities.len(), "decoded topology response");
        Ok(entities)
    }
}

impl ResponseNode {
    fn into_graph_entity(self, len: usize) -> Result<GraphEntity> {
        let entity = self.entity.into_entity();

        let mut out_edges = Vec::with_capacity(self.out_edges.len());
        for (key, props) in self.out_edges {
            let target = key
                .parse::<usize>()
                .map_err(|_| Error::InvalidReferenceKey {
                    source_id: entity.id.clone(),
                    key: key.clone(),
                })?;
            if target >= len {
                return Err(Error::InvalidReference {
                    source_id: entity.id.clone(),
                    index: target,
                    len,
                });
            }
            out_edges.push(OutEdge {
                target,
                properties: props.properties,
            });
        }

        Ok(GraphEntity {
            entity,
            out_edges,
            internet_access: self.internet_access,
            policy_ids: self.policy_ids,
            non_isolated_ingress: self.non_isolated_ingress,
            non_isolated_egress: self.non_isolated_egress,
            query_match: self.query_match,
        })
    }
}
