//! A Module with some utilities for working with NodeIds

/// The Type used to reference a Node in the Graph
pub type NodeId = u32;
use std::hash::{BuildHasherDefault, Hasher};

/// A specialized [`HashMap`](hashbrown::HashMap) keyed by NodeIds, with a trivial Hasher
pub type NodeIdMap<V> = hashbrown::HashMap<NodeId, V, BuildHasherDefault<NodeIdHasher>>;
/// A specialized [`HashSet`](hashbrown::HashSet) of NodeIds, with a trivial Hasher
pub type NodeIdSet = hashbrown::HashSet<NodeId, BuildHasherDefault<NodeIdHasher>>;

/// A [`Hasher`] specialized on NodeIds
///
/// Ids are already unique small integers, so the hash is the id itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NodeIdHasher(u64);

impl Hasher for NodeIdHasher {
    /// panics, since only NodeIds are supposed to be used
    fn write(&mut self, _: &[u8]) {
        unreachable!("This Hasher only works with NodeIds")
    }
    /// Writes a single NodeId into this hasher.
    fn write_u32(&mut self, id: NodeId) {
        self.0 = id as u64
    }
    fn finish(&self) -> u64 {
        self.0
    }
}
