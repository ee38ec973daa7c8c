//! Following a solved route and recovering from obstructions.

use crate::{solve, Graph, NodeId};
use log::debug;

/// The lifecycle of a [`RouteFollower`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowState {
    /// not following anything; also the cancelled state
    Idle,
    /// en route; the next [`advance`](RouteFollower::advance) moves one hop
    Following,
    /// the next hop was found blocked; the next
    /// [`advance`](RouteFollower::advance) performs a fresh solve
    Rerouting,
    /// the destination was reached
    Arrived,
    /// no route to the destination exists under the current blocked flags
    Stuck,
}

/// Walks a solved route hop by hop and reroutes around obstructions.
///
/// The follower advances through discrete events rather than timers: each
/// [`advance`](RouteFollower::advance) call processes exactly one event.
/// While [`Following`](FollowState::Following), an `advance` either moves one
/// hop or, if the hop target has become blocked, transitions to
/// [`Rerouting`](FollowState::Rerouting). An `advance` while `Rerouting` runs
/// a fresh [`solve`] from the current Node to the original destination. There
/// is no incremental recomputation, and no optimality guarantee across the
/// sequence of reroutes. Rendering layers interpolate between hops on their
/// own schedule and simply feed events in.
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
/// let mut graph = build_graph(&config, &mut || 1.0);
///
/// let mut follower = RouteFollower::start(&graph, 0, 2);
/// assert_eq!(follower.state(), FollowState::Following);
///
/// // an obstruction appears on the next hop
/// graph.toggle_blocked(1);
/// assert_eq!(follower.advance(&graph), FollowState::Rerouting);
/// assert_eq!(follower.advance(&graph), FollowState::Following);
///
/// while follower.state() == FollowState::Following {
///     follower.advance(&graph);
/// }
/// assert_eq!(follower.state(), FollowState::Arrived);
/// assert_eq!(follower.position(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct RouteFollower {
    destination: NodeId,
    position: NodeId,
    path: Vec<NodeId>,
    step: usize,
    total_distance: f64,
    state: FollowState,
}

impl RouteFollower {
    /// Solves `start -> destination` and begins following the result.
    ///
    /// Starts out [`Following`](FollowState::Following) on success,
    /// [`Arrived`](FollowState::Arrived) when `start == destination`, or
    /// [`Stuck`](FollowState::Stuck) when no route exists.
    pub fn start(graph: &Graph, start: NodeId, destination: NodeId) -> RouteFollower {
        let result = solve(graph, start, destination);
        let state = if result.is_empty() {
            FollowState::Stuck
        } else if result.len() == 1 {
            FollowState::Arrived
        } else {
            FollowState::Following
        };
        debug!(
            "follower {} -> {}: starting {:?}",
            start, destination, state
        );
        RouteFollower {
            destination,
            position: start,
            path: result.nodes().to_vec(),
            step: 0,
            total_distance: result.total_distance(),
            state,
        }
    }

    /// Processes one discrete event and returns the resulting state.
    ///
    /// [`Idle`](FollowState::Idle), [`Arrived`](FollowState::Arrived) and
    /// [`Stuck`](FollowState::Stuck) absorb the event.
    pub fn advance(&mut self, graph: &Graph) -> FollowState {
        match self.state {
            FollowState::Following => {
                let next = self.path[self.step + 1];
                if graph.is_blocked(next) {
                    debug!("hop target {} is blocked, rerouting", next);
                    self.state = FollowState::Rerouting;
                } else {
                    self.step += 1;
                    self.position = next;
                    if self.step + 1 >= self.path.len() {
                        debug!("arrived at {}", self.destination);
                        self.state = FollowState::Arrived;
                    }
                }
            }
            FollowState::Rerouting => {
                let result = solve(graph, self.position, self.destination);
                if result.is_empty() {
                    debug!(
                        "no alternative route from {} to {}",
                        self.position, self.destination
                    );
                    self.state = FollowState::Stuck;
                } else {
                    debug!("rerouted: {}", result);
                    self.total_distance = result.total_distance();
                    self.path = result.nodes().to_vec();
                    self.step = 0;
                    self.state = if self.path.len() == 1 {
                        FollowState::Arrived
                    } else {
                        FollowState::Following
                    };
                }
            }
            FollowState::Idle | FollowState::Arrived | FollowState::Stuck => {}
        }
        self.state
    }

    /// Abandons the route; cancellation is just a transition to
    /// [`Idle`](FollowState::Idle).
    pub fn cancel(&mut self) {
        debug!("follower to {} cancelled", self.destination);
        self.state = FollowState::Idle;
    }

    /// The current state.
    pub fn state(&self) -> FollowState {
        self.state
    }

    /// The Node the follower currently occupies.
    pub fn position(&self) -> NodeId {
        self.position
    }

    /// The original destination. Rerouting never changes it.
    pub fn destination(&self) -> NodeId {
        self.destination
    }

    /// The route currently being followed. Empty when the initial solve
    /// already failed.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// The total distance of the route currently being followed.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_graph, GridConfig};

    fn unit_grid() -> Graph {
        let config = GridConfig {
            node_count: 9,
            grid_width: 3,
            spacing: 1.0,
            origin: (0.0, 0.0),
            diagonal_chance: 0.0,
        };
        build_graph(&config, &mut || 1.0)
    }

    #[test]
    fn follows_to_arrival() {
        let graph = unit_grid();
        let mut follower = RouteFollower::start(&graph, 0, 2);

        assert_eq!(follower.state(), FollowState::Following);
        assert_eq!(follower.path(), &[0, 1, 2]);

        assert_eq!(follower.advance(&graph), FollowState::Following);
        assert_eq!(follower.position(), 1);
        assert_eq!(follower.advance(&graph), FollowState::Arrived);
        assert_eq!(follower.position(), 2);

        // arrived absorbs further events
        assert_eq!(follower.advance(&graph), FollowState::Arrived);
        assert_eq!(follower.position(), 2);
    }

    #[test]
    fn already_there() {
        let graph = unit_grid();
        let follower = RouteFollower::start(&graph, 4, 4);

        assert_eq!(follower.state(), FollowState::Arrived);
        assert_eq!(follower.position(), 4);
        assert_eq!(follower.total_distance(), 0.0);
    }

    #[test]
    fn reroutes_around_new_obstruction() {
        let mut graph = unit_grid();
        let mut follower = RouteFollower::start(&graph, 0, 2);

        // the hop target becomes blocked before the follower gets there
        graph.toggle_blocked(1);
        assert_eq!(follower.advance(&graph), FollowState::Rerouting);
        assert_eq!(follower.position(), 0);

        assert_eq!(follower.advance(&graph), FollowState::Following);
        assert_eq!(follower.path(), &[0, 3, 4, 5, 2]);
        assert_eq!(follower.destination(), 2);

        for expected in [3, 4, 5] {
            follower.advance(&graph);
            assert_eq!(follower.position(), expected);
        }
        assert_eq!(follower.advance(&graph), FollowState::Arrived);
        assert_eq!(follower.position(), 2);
    }

    #[test]
    fn stuck_when_no_alternative_exists() {
        let mut graph = unit_grid();
        let mut follower = RouteFollower::start(&graph, 0, 2);

        // cordon the start off entirely
        graph.toggle_blocked(1);
        graph.toggle_blocked(3);
        assert_eq!(follower.advance(&graph), FollowState::Rerouting);
        assert_eq!(follower.advance(&graph), FollowState::Stuck);

        // stuck absorbs further events
        assert_eq!(follower.advance(&graph), FollowState::Stuck);
        assert_eq!(follower.position(), 0);
    }

    #[test]
    fn stuck_from_the_start() {
        let mut graph = unit_grid();
        graph.toggle_blocked(2);
        let follower = RouteFollower::start(&graph, 0, 2);

        assert_eq!(follower.state(), FollowState::Stuck);
        assert!(follower.path().is_empty());
        assert!(follower.total_distance().is_infinite());
    }

    #[test]
    fn cancel_is_idle() {
        let graph = unit_grid();
        let mut follower = RouteFollower::start(&graph, 0, 2);

        follower.advance(&graph);
        follower.cancel();
        assert_eq!(follower.state(), FollowState::Idle);

        // idle absorbs events
        assert_eq!(follower.advance(&graph), FollowState::Idle);
        assert_eq!(follower.position(), 1);
    }

    #[test]
    fn unblocking_allows_rerouting_through() {
        let mut graph = unit_grid();
        let mut follower = RouteFollower::start(&graph, 0, 2);

        graph.toggle_blocked(1);
        assert_eq!(follower.advance(&graph), FollowState::Rerouting);

        // obstruction clears before the reroute solve runs
        graph.toggle_blocked(1);
        assert_eq!(follower.advance(&graph), FollowState::Following);
        assert_eq!(follower.path(), &[0, 1, 2]);
    }
}
