#![forbid(unsafe_code)]

//! Headless topology visualization model.
//!
//! Converts the flat entity graph returned by a topology query service into
//! the hierarchical node/group/edge model a rendering layer consumes.
//!
//! Design goals:
//! - pure, deterministic transforms (input order drives output order)
//! - fresh output per call; input is never retained or mutated
//! - unknown entity kinds degrade gracefully instead of failing

pub mod builder;
pub mod entities;
pub mod error;
pub mod geom;
pub mod model;
pub mod response;
pub mod scope;

pub use builder::{BuildOptions, EdgeIdScheme, build_model};
pub use entities::{Entity, EntityKind, GraphEntity, OutEdge};
pub use error::{Error, Result};
pub use model::{EdgeModel, GroupNode, NodeKind, NodeModel, VisualizationModel};
pub use response::GraphResponse;
