//! Graph components - nodes and the roads they own

use serde::{Deserialize, Serialize};

/// Dense index of a node in its graph's arena.
///
/// Assigned sequentially by [`Graph::create_node`](crate::Graph::create_node)
/// and stable until [`Graph::remove_isolated_nodes`](crate::Graph::remove_isolated_nodes)
/// compacts the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Position of the node in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Graph node: identity, payload, and the outgoing roads it owns.
///
/// A node never holds incoming roads; reverse traversal requires a
/// road explicitly created in the other direction.
#[derive(Debug, Clone)]
pub struct Node<I> {
    pub(crate) id: NodeId,
    pub(crate) info: I,
    pub(crate) roads: Vec<Road>,
}

impl<I> Node<I> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn info(&self) -> &I {
        &self.info
    }

    /// Outgoing roads, in insertion order.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub fn out_degree(&self) -> usize {
        self.roads.len()
    }
}

/// Directed, positively-weighted edge between two nodes.
///
/// Identified by its ordered `(start, end)` pair: a graph holds at most
/// one road per pair. Owned by its start node; the end node is referenced
/// by index only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub start: NodeId,
    pub end: NodeId,
    pub weight: f64,
}
