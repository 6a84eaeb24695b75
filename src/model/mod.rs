//! Data model for shortest-path routing
//!
//! Contains the generic node/road arena and the geographic map
//! specialization built on top of it.

pub mod components;
pub mod graph;
pub mod map;
pub mod way;

pub use components::{Node, NodeId, Road};
pub use graph::Graph;
pub use map::{Extent, MapGraph, MapPoint, MapWay};
pub use way::Way;
