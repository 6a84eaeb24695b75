//! Geographic map specialization
//!
//! Nodes carry an externally supplied stable id and lon/lat coordinates;
//! roads default to great-circle distance weights.

pub mod distance;
pub mod extent;
pub mod graph;
mod to_geojson;

pub use distance::great_circle_distance;
pub use extent::Extent;
pub use graph::{IndexedPoint, MapGraph, MapPoint, MapWay};
