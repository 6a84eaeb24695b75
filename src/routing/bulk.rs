//! One-to-many and many-pair searches.
//!
//! Search state is local to every call, so these helpers can fan out over
//! a shared `&Graph` without any locking.

use hashbrown::HashMap;
use rayon::prelude::*;

use crate::error::Error;
use crate::model::{Graph, NodeId, Way};

use super::search::explore;

/// Best-known way weight from `start` to every reached node.
///
/// `max_weight` bounds exploration to a radius around `start`; nodes first
/// reached just beyond the cutoff may still appear in the result, so
/// callers enforcing a strict radius should filter on the returned weights.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if `start` is not a member of `graph`.
pub fn way_weights<I>(
    graph: &Graph<I>,
    start: NodeId,
    max_weight: Option<f64>,
) -> Result<HashMap<NodeId, f64>, Error> {
    graph.check_member(start)?;
    Ok(explore(graph, start, None, max_weight).into_weights())
}

/// Minimum-weight ways from `start` to each of `targets`, from a single
/// search. `None` marks an unreachable target.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if `start` or any target is not a member
/// of `graph`.
pub fn find_ways_from<I>(
    graph: &Graph<I>,
    start: NodeId,
    targets: &[NodeId],
) -> Result<Vec<Option<Way>>, Error> {
    graph.check_member(start)?;
    for &target in targets {
        graph.check_member(target)?;
    }

    let tree = explore(graph, start, None, None);
    Ok(targets.iter().map(|&t| tree.way_to(t)).collect())
}

/// Independent searches for every `(start, end)` pair, run in parallel.
pub fn find_ways_bulk<I: Sync>(
    graph: &Graph<I>,
    pairs: &[(NodeId, NodeId)],
) -> Vec<Result<Way, Error>> {
    pairs
        .par_iter()
        .map(|&(start, end)| graph.find_way(start, end))
        .collect()
}
