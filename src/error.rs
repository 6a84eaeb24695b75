use thiserror::Error;

use crate::model::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("node {0:?} is not a member of this graph")]
    UnknownNode(NodeId),
    #[error("road weight must be positive and finite, got {0}")]
    InvalidWeight(f64),
    #[error("self-loop roads are not allowed (node {0:?})")]
    SelfLoop(NodeId),
    #[error("no way exists from {start:?} to {end:?}")]
    NoPath { start: NodeId, end: NodeId },
    #[error("no map node with id {0}")]
    UnknownMapNode(i64),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJson(String),
}
