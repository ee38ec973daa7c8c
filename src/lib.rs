#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate for shortest-path routing on a fixed city grid with dynamic obstructions.
//!
//! ## Introduction
//! The Graph is a small, fixed-topology grid of intersections: every Node has
//! stable coordinates and an adjacency list built once by [`build_graph`], and a
//! mutable `blocked` flag that can be toggled at any time afterwards. Axial
//! (up/down/left/right) edges follow the grid layout; diagonal edges are added
//! randomly per Node, which makes diagonal adjacency possibly one-way (see
//! [`build_graph`] for why that is deliberate).
//!
//! [`solve`] runs Dijkstra's algorithm over a snapshot of the Graph and the
//! current blocked flags. A blocked Node can neither be entered nor departed
//! from. The solver is a pure function: it holds no state between calls, so
//! recovering from an obstruction discovered mid-route is simply a fresh
//! [`solve`] from wherever the route-follower currently is. [`RouteFollower`]
//! packages that protocol as an explicit state machine.
//!
//! The Graph is small (80 Nodes in the reference configuration), so the solver
//! uses a plain linear scan to select the next Node instead of a priority
//! queue. This keeps tie-breaking deterministic: among equally distant Nodes,
//! the lowest id always wins.
//!
//! ## Examples
//! Building the Graph and finding a route:
//! ```
//! use grid_router::prelude::*;
//!
//! let config = GridConfig::default();
//! let mut rng = WyRandSource::seeded(42);
//! let graph = build_graph(&config, &mut rng);
//!
//! let result = solve(&graph, 0, 79);
//! assert!(!result.is_empty());
//! assert!(result.total_distance().is_finite());
//! ```
//!
//! Topology can be pinned down in tests by disabling the random diagonals,
//! either through the config or by injecting a closure as the random source:
//! ```
//! use grid_router::prelude::*;
//!
//! let config = GridConfig {
//!     diagonal_chance: 0.0,
//!     ..GridConfig::default()
//! };
//! let graph = build_graph(&config, &mut || 1.0);
//!
//! // node 0 sits at the origin (100, 100), node 1 one spacing to the right
//! let result = solve(&graph, 0, 1);
//! assert_eq!(result, vec![0, 1]);
//! assert_eq!(result.total_distance(), 60.0);
//! ```
//!
//! ### Obstructions and rerouting
//! Blocking a Node takes effect on the next solve. Blocking the target itself
//! makes it unreachable, since a blocked Node may not be entered:
//! ```
//! use grid_router::prelude::*;
//!
//! let config = GridConfig {
//!     diagonal_chance: 0.0,
//!     ..GridConfig::default()
//! };
//! let mut graph = build_graph(&config, &mut || 1.0);
//!
//! graph.toggle_blocked(1);
//! let result = solve(&graph, 0, 1);
//! assert!(result.is_unreachable());
//! assert!(result.nodes().is_empty());
//!
//! graph.toggle_blocked(1);
//! assert!(!graph.is_blocked(1));
//! ```
//!
//! Invalid Node ids never abort: accessors return `None`/`false` and mutators
//! are no-ops, so exploratory callers (UI clicks, randomized blocking) cannot
//! crash the solver.

mod node_id;
pub use node_id::{NodeId, NodeIdHasher, NodeIdMap, NodeIdSet};

mod graph;
pub use graph::{build_graph, Graph, GridConfig, Node};

mod path;
pub use path::PathResult;

mod solver;
pub use solver::solve;

mod route;
pub use route::{FollowState, RouteFollower};

pub mod rng;

/// The most commonly used items, for glob import.
pub mod prelude {
    pub use crate::rng::{RandomSource, WyRandSource};
    pub use crate::{
        build_graph, solve, FollowState, Graph, GridConfig, Node, NodeId, PathResult,
        RouteFollower,
    };
}
