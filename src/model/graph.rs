//! Node arena and road construction

use crate::error::Error;
use crate::routing;

use super::components::{Node, NodeId, Road};
use super::way::Way;

/// Weighted directed graph over an arena of payload-carrying nodes.
///
/// Nodes live in a single growable vector owned by the graph; roads store
/// arena indices, never references, so a road can never outlive or own a
/// node. All mutation requires `&mut self`, which statically rules out
/// mutating the graph while a search borrows it.
///
/// Iteration order is identity order (creation order), fixed across calls.
#[derive(Debug, Clone)]
pub struct Graph<I> {
    nodes: Vec<Node<I>>,
}

impl<I> Default for Graph<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Graph<I> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
        }
    }

    /// Allocate a node with the next sequential identity. Always succeeds.
    pub fn create_node(&mut self, info: I) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            id,
            info,
            roads: Vec::new(),
        });
        id
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of roads over all nodes.
    pub fn road_count(&self) -> usize {
        self.nodes.iter().map(|n| n.roads.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get_node(&self, id: NodeId) -> Option<&Node<I>> {
        self.nodes.get(id.index())
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `id` is not a member of this graph.
    pub fn node(&self, id: NodeId) -> Result<&Node<I>, Error> {
        self.get_node(id).ok_or(Error::UnknownNode(id))
    }

    /// Outgoing roads of `id`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `id` is not a member of this graph.
    pub fn roads_from(&self, id: NodeId) -> Result<&[Road], Error> {
        Ok(self.node(id)?.roads())
    }

    /// Nodes in identity order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<I>> {
        self.nodes.iter()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    pub fn has_road(&self, start: NodeId, end: NodeId) -> bool {
        self.get_node(start)
            .is_some_and(|n| n.roads.iter().any(|r| r.end == end))
    }

    /// Create a directed road `start -> end` with the given weight.
    ///
    /// Returns whether a new road was created: re-adding an existing
    /// `(start, end)` pair is a no-op that leaves the existing road's
    /// weight untouched and returns `Ok(false)`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownNode`] if either node is not a member,
    /// [`Error::InvalidWeight`] for a non-positive or non-finite weight,
    /// [`Error::SelfLoop`] if `start == end`. Nothing is mutated on error.
    pub fn one_way(&mut self, start: NodeId, end: NodeId, weight: f64) -> Result<bool, Error> {
        self.check_member(start)?;
        self.check_member(end)?;
        if start == end {
            return Err(Error::SelfLoop(start));
        }
        if !(weight > 0.0 && weight.is_finite()) {
            return Err(Error::InvalidWeight(weight));
        }
        if self.has_road(start, end) {
            return Ok(false);
        }
        self.nodes[start.index()].roads.push(Road { start, end, weight });
        Ok(true)
    }

    /// Create roads in both directions between `a` and `b`, each of the
    /// given weight.
    ///
    /// # Errors
    ///
    /// Same preconditions as [`Graph::one_way`]; a failure in either
    /// direction is propagated.
    pub fn two_way(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<(), Error> {
        self.one_way(a, b, weight)?;
        self.one_way(b, a, weight)?;
        Ok(())
    }

    /// Minimum-total-weight way from `start` to `end`.
    ///
    /// Returns the empty way when `start == end`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownNode`] for non-member endpoints,
    /// [`Error::NoPath`] when `end` is unreachable from `start`.
    pub fn find_way(&self, start: NodeId, end: NodeId) -> Result<Way, Error> {
        self.check_member(start)?;
        self.check_member(end)?;
        routing::search::explore(self, start, Some(end), None)
            .way_to(end)
            .ok_or(Error::NoPath { start, end })
    }

    /// Drop every node no road touches and compact the arena.
    ///
    /// Node identities are reassigned; previously obtained [`NodeId`]s are
    /// invalidated. Returns the number of nodes removed. Intended for
    /// loader finalization, before any search.
    pub fn remove_isolated_nodes(&mut self) -> usize {
        const TOMBSTONE: NodeId = NodeId(u32::MAX);

        let mut referenced = vec![false; self.nodes.len()];
        for node in &self.nodes {
            for road in &node.roads {
                referenced[road.end.index()] = true;
            }
        }

        let mut remap = vec![TOMBSTONE; self.nodes.len()];
        let mut next = 0u32;
        for (i, node) in self.nodes.iter().enumerate() {
            if !node.roads.is_empty() || referenced[i] {
                remap[i] = NodeId(next);
                next += 1;
            }
        }

        let before = self.nodes.len();
        let old = std::mem::take(&mut self.nodes);
        let mut kept = Vec::with_capacity(next as usize);
        for mut node in old {
            let new_id = remap[node.id.index()];
            if new_id == TOMBSTONE {
                continue;
            }
            node.id = new_id;
            for road in &mut node.roads {
                road.start = new_id;
                debug_assert!(
                    remap[road.end.index()] != TOMBSTONE,
                    "pruned node still referenced by a road"
                );
                road.end = remap[road.end.index()];
            }
            kept.push(node);
        }
        self.nodes = kept;
        before - self.nodes.len()
    }

    pub(crate) fn check_member(&self, id: NodeId) -> Result<(), Error> {
        if id.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(Error::UnknownNode(id))
        }
    }
}
