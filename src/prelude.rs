// Re-export key components
pub use crate::error::Error;
pub use crate::loading::{LoadConfig, MapRecord, MapSource, MemorySource, load_map};
pub use crate::model::map::great_circle_distance;
pub use crate::model::{Extent, Graph, MapGraph, MapPoint, MapWay, Node, NodeId, Road, Way};
pub use crate::routing::{find_ways_bulk, find_ways_from, way_weights};
