use std::cmp::Ordering;

use crate::model::NodeId;

#[derive(Copy, Clone, PartialEq)]
pub(super) struct State {
    pub(super) cost: f64,
    pub(super) node: NodeId,
}

// cost is always finite here, so total_cmp gives a proper total order
impl Eq for State {}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap);
        // equal costs pop the smaller node id first, keeping repeated
        // searches deterministic
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
