use super::Graph;
use crate::rng::RandomSource;
use crate::NodeId;
use log::debug;

/// Options for [`build_graph`].
///
/// The defaults are the reference configuration: an 80-Node grid, 9 Nodes per
/// row, laid out at a spacing of 60 starting from (100, 100), with a 0.3
/// chance per upward diagonal.
///
/// ## Examples
/// ```
/// use grid_router::prelude::*;
///
/// let config = GridConfig {
///     node_count: 9,
///     grid_width: 3,
///     diagonal_chance: 0.0,
///     ..GridConfig::default()
/// };
/// let graph = build_graph(&config, &mut || 1.0);
/// assert_eq!(graph.len(), 9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// total number of Nodes; the last row may be partial
    ///
    /// Default: `80`
    pub node_count: usize,
    /// Nodes per row
    ///
    /// Default: `9`
    pub grid_width: usize,
    /// distance between axially adjacent Nodes
    ///
    /// Default: `60.0`
    pub spacing: f64,
    /// position of Node 0; Node `i` sits at `origin + (col, row) * spacing`
    ///
    /// Default: `(100.0, 100.0)`
    pub origin: (f64, f64),
    /// probability of each upward diagonal edge, drawn once per Node per
    /// direction
    ///
    /// Default: `0.3`
    pub diagonal_chance: f64,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            node_count: 80,
            grid_width: 9,
            spacing: 60.0,
            origin: (100.0, 100.0),
            diagonal_chance: 0.3,
        }
    }
}

/// Builds the city grid once.
///
/// Node count, ids and coordinates are fully determined by the config. Every
/// Node emits its own axial edges (right, down, left, up) towards grid
/// neighbors whose id is in range, so axial adjacency ends up symmetric even
/// though edges are directed.
///
/// The two upward diagonals (up-left, up-right) are each added with
/// probability [`diagonal_chance`](GridConfig::diagonal_chance), drawn
/// independently per Node per direction from `rng`. Because each endpoint
/// decides on its own, a diagonal may exist in one direction only. That
/// asymmetry is intentional and kept as-is; pass a fixed seed or a closure
/// source for reproducible topology.
pub fn build_graph(config: &GridConfig, rng: &mut impl RandomSource) -> Graph {
    let n = config.node_count;
    let width = config.grid_width;
    let mut graph = Graph::with_capacity(n);

    for i in 0..n {
        let row = i / width;
        let col = i % width;
        graph.add_node((
            config.origin.0 + col as f64 * config.spacing,
            config.origin.1 + row as f64 * config.spacing,
        ));
    }

    for i in 0..n {
        let row = i / width;
        let col = i % width;
        let mut neighbors = Vec::new();

        // axial edges, clockwise from the right
        if col + 1 < width && i + 1 < n {
            neighbors.push((i + 1) as NodeId);
        }
        if i + width < n {
            neighbors.push((i + width) as NodeId);
        }
        if col > 0 {
            neighbors.push((i - 1) as NodeId);
        }
        if i >= width {
            neighbors.push((i - width) as NodeId);
        }

        // upward diagonals, one independent draw per direction
        if row > 0 && col > 0 && rng.roll() < config.diagonal_chance {
            neighbors.push((i - width - 1) as NodeId);
        }
        if row > 0 && col + 1 < width && rng.roll() < config.diagonal_chance {
            neighbors.push((i - width + 1) as NodeId);
        }

        graph[i as NodeId].neighbors = neighbors;
    }

    debug!(
        "built {}-wide grid with {} nodes and {} edges",
        width,
        graph.len(),
        graph.nodes().map(|node| node.neighbors.len()).sum::<usize>()
    );

    graph
}
