//! Shortest-path result type

use itertools::Itertools;
use serde::Serialize;

use super::components::{NodeId, Road};

/// Ordered, continuous sequence of roads with an accumulated total weight.
///
/// The empty way (zero roads, zero weight) is the "already there" result of
/// searching from a node to itself; callers distinguish it from the
/// unreachable case, which is reported as an error instead.
///
/// Cloning a way is a cheap snapshot: the roads are plain copyable values.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Way {
    roads: Vec<Road>,
    weight: f64,
}

impl Way {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(roads: usize) -> Self {
        Self {
            roads: Vec::with_capacity(roads),
            weight: 0.0,
        }
    }

    /// Append a road, accumulating its weight.
    ///
    /// The road must continue the way: its start is the current end.
    pub(crate) fn push(&mut self, road: Road) {
        debug_assert!(
            self.roads.last().is_none_or(|last| last.end == road.start),
            "discontinuous road appended to way"
        );
        self.weight += road.weight;
        self.roads.push(road);
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Total weight: the sum of all road weights.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of roads.
    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    /// First node of the way, if any road has been appended.
    pub fn start(&self) -> Option<NodeId> {
        self.roads.first().map(|r| r.start)
    }

    /// Last node of the way, if any road has been appended.
    pub fn end(&self) -> Option<NodeId> {
        self.roads.last().map(|r| r.end)
    }

    /// Nodes visited along the way, start first.
    ///
    /// Empty for the empty way (the lone node is not recoverable from
    /// zero roads).
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.roads
            .first()
            .map(|r| r.start)
            .into_iter()
            .chain(self.roads.iter().map(|r| r.end))
    }

    /// Whether every consecutive road pair connects end-to-start.
    pub fn is_continuous(&self) -> bool {
        self.roads
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.end == b.start)
    }
}
