use crate::NodeId;

/// A single intersection of the city grid.
///
/// Coordinates and adjacency are fixed at construction; only
/// [`blocked`](Node::blocked) changes over a Node's lifetime. `neighbors`
/// holds *outgoing* adjacency: an entry means this Node emits an edge towards
/// that id. Axial edges are emitted by both endpoints and are therefore
/// symmetric in practice; diagonal edges are drawn independently per endpoint
/// and may exist in one direction only.
#[derive(Clone, Debug)]
pub struct Node {
    /// stable id in `0..node_count`
    pub id: NodeId,
    /// planar position, in the same units as [`GridConfig::spacing`](crate::GridConfig)
    pub pos: (f64, f64),
    /// outgoing adjacency, in emission order
    pub neighbors: Vec<NodeId>,
    /// whether this Node can currently be entered or departed from
    pub blocked: bool,
}

impl Node {
    pub(crate) fn new(id: NodeId, pos: (f64, f64)) -> Node {
        Node {
            id,
            pos,
            neighbors: Vec::new(),
            blocked: false,
        }
    }

    /// The Euclidean distance to `other`.
    ///
    /// Edges carry no stored weight; the solver derives it from the endpoint
    /// positions on demand.
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = self.pos.0 - other.pos.0;
        let dy = self.pos.1 - other.pos.1;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance() {
        let a = Node::new(0, (0.0, 0.0));
        let b = Node::new(1, (3.0, 4.0));
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }
}
