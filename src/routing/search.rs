//! Label-correcting shortest-path search.
//!
//! All search state lives in locals of [`explore`]: best-known weights and
//! predecessor roads in hash maps, the closed set in a bitset. Nothing is
//! written to the graph, so concurrent searches may share one `&Graph`.

use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;

use crate::model::{Graph, NodeId, Road, Way};

use super::state::State;

/// Shortest-way tree rooted at `start`, as far as the search explored.
pub(crate) struct SearchTree {
    start: NodeId,
    weights: HashMap<NodeId, f64>,
    predecessors: HashMap<NodeId, Road>,
}

impl SearchTree {
    /// Weight of the best way found to `node`, if it was reached.
    pub(crate) fn weight_to(&self, node: NodeId) -> Option<f64> {
        self.weights.get(&node).copied()
    }

    pub(crate) fn into_weights(self) -> HashMap<NodeId, f64> {
        self.weights
    }

    /// Reconstruct the way from the root to `target` by walking
    /// predecessor roads backwards. `None` if `target` was not reached.
    pub(crate) fn way_to(&self, target: NodeId) -> Option<Way> {
        if target == self.start {
            return Some(Way::new());
        }

        let mut roads = Vec::new();
        let mut current = target;
        while current != self.start {
            let road = self.predecessors.get(&current)?;
            roads.push(*road);
            current = road.start;
        }
        roads.reverse();

        let mut way = Way::with_capacity(roads.len());
        for road in roads {
            way.push(road);
        }
        debug_assert!(way.is_continuous());
        Some(way)
    }
}

/// Run the search from `start`.
///
/// A node's best-known weight may be corrected any number of times while it
/// sits on the frontier; once popped it is closed and never relaxed again
/// (roads into closed nodes are skipped, pruning cycles). Stale frontier
/// entries are discarded via the closed set on pop.
///
/// With `target` set, the loop stops as soon as the target is closed —
/// weights are strictly positive, so its label is final at that point.
/// `max_weight` bounds exploration to a radius around the root.
pub(crate) fn explore<I>(
    graph: &Graph<I>,
    start: NodeId,
    target: Option<NodeId>,
    max_weight: Option<f64>,
) -> SearchTree {
    let estimated_nodes = graph.node_count().min(1000);
    let mut weights: HashMap<NodeId, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeId, Road> = HashMap::with_capacity(estimated_nodes);
    let mut closed = FixedBitSet::with_capacity(graph.node_count());
    let mut frontier = BinaryHeap::with_capacity(estimated_nodes / 4);

    weights.insert(start, 0.0);
    frontier.push(State {
        cost: 0.0,
        node: start,
    });

    while let Some(State { cost, node }) = frontier.pop() {
        if closed.contains(node.index()) {
            continue;
        }
        closed.insert(node.index());

        if target == Some(node) {
            break;
        }

        if let Some(max) = max_weight
            && cost > max
        {
            continue;
        }

        let roads = graph
            .get_node(node)
            .map(|n| n.roads())
            .unwrap_or_default();
        for road in roads {
            if closed.contains(road.end.index()) {
                continue;
            }
            let next_cost = cost + road.weight;

            match weights.entry(road.end) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(road.end, *road);
                    frontier.push(State {
                        cost: next_cost,
                        node: road.end,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(road.end, *road);
                        frontier.push(State {
                            cost: next_cost,
                            node: road.end,
                        });
                    }
                }
            }
        }
    }

    SearchTree {
        start,
        weights,
        predecessors,
    }
}
