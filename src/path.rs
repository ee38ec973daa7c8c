use crate::NodeId;

/// The outcome of a single [`solve`](crate::solve) call.
///
/// Holds the route as an ordered walk of adjacent Node ids, the accumulated
/// Euclidean distance, and the full per-Node distance/predecessor tables of
/// the run. The tables are diagnostic: they may be partially populated even
/// when the target was never reached. A result is created fresh on every
/// solve and never mutated afterwards.
///
/// "No route" is an empty walk plus an infinite distance, distinguishable
/// from the genuinely zero-length `start == end` case (single-Node walk,
/// distance 0). Consumers interpolating along the route must treat an empty
/// walk as "no route", not as a renderable point.
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    path: Vec<NodeId>,
    total_distance: f64,
    distances: Vec<f64>,
    predecessors: Vec<Option<NodeId>>,
}

impl PathResult {
    pub(crate) fn new(
        path: Vec<NodeId>,
        total_distance: f64,
        distances: Vec<f64>,
        predecessors: Vec<Option<NodeId>>,
    ) -> PathResult {
        PathResult {
            path,
            total_distance,
            distances,
            predecessors,
        }
    }

    /// An all-infinite result, used when an endpoint id is out of range.
    pub(crate) fn unreachable(node_count: usize) -> PathResult {
        PathResult {
            path: Vec::new(),
            total_distance: f64::INFINITY,
            distances: vec![f64::INFINITY; node_count],
            predecessors: vec![None; node_count],
        }
    }

    /// The route, start to end inclusive. Empty when no route exists.
    pub fn nodes(&self) -> &[NodeId] {
        &self.path
    }

    /// Returns an Iterator over the route's Node ids.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.path.iter()
    }

    /// The number of Nodes on the route.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` when no route exists.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Sum of the Euclidean edge lengths along the route, or `f64::INFINITY`
    /// when no route exists.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// `true` when the target could not be reached under the blocked-flag
    /// snapshot the solve observed.
    pub fn is_unreachable(&self) -> bool {
        self.total_distance.is_infinite()
    }

    /// The tentative distance the solve assigned to `id`, or `None` for an
    /// out-of-range id. Unreached Nodes report `f64::INFINITY`.
    pub fn distance_to(&self, id: NodeId) -> Option<f64> {
        self.distances.get(id as usize).copied()
    }

    /// The predecessor of `id` on the shortest-path tree, if it was assigned
    /// one during the solve.
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.predecessors.get(id as usize).copied().flatten()
    }
}

use std::ops::Index;

impl Index<usize> for PathResult {
    type Output = NodeId;
    fn index(&self, index: usize) -> &NodeId {
        &self.path[index]
    }
}

impl<'a> IntoIterator for &'a PathResult {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq<Vec<NodeId>> for PathResult {
    fn eq(&self, rhs: &Vec<NodeId>) -> bool {
        self.path == *rhs
    }
}

impl<'a> PartialEq<&'a [NodeId]> for PathResult {
    fn eq(&self, rhs: &&'a [NodeId]) -> bool {
        self.path == *rhs
    }
}

use std::fmt;
impl fmt::Display for PathResult {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Route[Distance = {}]: ", self.total_distance)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for id in self.path.iter().skip(1) {
                write!(fmt, " -> {}", id)?;
            }
            Ok(())
        }
    }
}
