mod node;
pub use node::Node;

mod builder;
pub use builder::{build_graph, GridConfig};

use crate::{NodeId, NodeIdSet};
use log::debug;

/// The city grid: a fixed collection of Nodes plus their mutable blocked flags.
///
/// Built once by [`build_graph`] and owned as a plain value for the rest of
/// the process. Node count, ids, coordinates and adjacency never change after
/// construction; the per-Node blocked flag is the only mutable state, toggled
/// through [`toggle_blocked`](Graph::toggle_blocked) and read by the solver.
///
/// All id-taking methods absorb out-of-range ids instead of panicking:
/// accessors answer `None`/`false`, mutators do nothing.
#[derive(Clone, Debug)]
pub struct Graph {
    nodes: slab::Slab<Node>,
}

impl Graph {
    pub(crate) fn with_capacity(node_count: usize) -> Graph {
        Graph {
            nodes: slab::Slab::with_capacity(node_count),
        }
    }

    /// Nodes are only ever added during construction, so slab keys come out
    /// as the sequential ids `0..node_count`.
    pub(crate) fn add_node(&mut self, pos: (f64, f64)) -> NodeId {
        let entry = self.nodes.vacant_entry();
        let id = entry.key() as NodeId;
        entry.insert(Node::new(id, pos));
        id
    }

    /// The number of Nodes in the Graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the Graph has no Nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The Node with the given id, or `None` if the id is out of range.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    /// Iterates over all Nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().map(|(_, node)| node)
    }

    /// Flips the blocked flag of the given Node.
    ///
    /// Silently does nothing if the id is out of range.
    pub fn toggle_blocked(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id as usize) {
            node.blocked = !node.blocked;
            debug!(
                "node {} {}",
                id,
                if node.blocked { "blocked" } else { "unblocked" }
            );
        }
    }

    /// Whether the given Node is currently blocked.
    ///
    /// Out-of-range ids are never blocked.
    pub fn is_blocked(&self, id: NodeId) -> bool {
        self.nodes.get(id as usize).is_some_and(|node| node.blocked)
    }

    /// Unblocks every Node.
    pub fn clear_blocked(&mut self) {
        for (_, node) in self.nodes.iter_mut() {
            node.blocked = false;
        }
        debug!("cleared all blocked flags");
    }

    /// The set of currently blocked Node ids.
    pub fn blocked(&self) -> NodeIdSet {
        self.nodes()
            .filter(|node| node.blocked)
            .map(|node| node.id)
            .collect()
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeId> for Graph {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeId) -> &Node {
        &self.nodes[index as usize]
    }
}
impl IndexMut<NodeId> for Graph {
    #[track_caller]
    fn index_mut(&mut self, index: NodeId) -> &mut Node {
        &mut self.nodes[index as usize]
    }
}
