//! The shortest-path solver.

use crate::{Graph, NodeId, NodeIdSet, PathResult};
use log::trace;

/// Computes the shortest route from `start` to `end` over the Graph's current
/// blocked-flag snapshot.
///
/// This is Dijkstra's algorithm with a linear scan for the next Node: the
/// Graph is small and fixed, so the O(N²) scan is preferred over a priority
/// queue because it makes tie-breaking deterministic: among equally distant
/// unvisited Nodes, the lowest id is always selected. That tie-break is part
/// of the contract; callers may rely on identical routes for identical
/// snapshots.
///
/// A blocked Node is never departed from (its outgoing edges are not relaxed,
/// even if the Node itself was reached) and never entered (it is skipped as a
/// relaxation target). Edge weights are the Euclidean distances between
/// endpoint positions. Neighbor ids that are out of range are skipped.
///
/// If `end` was never reached, the result carries an empty route and the
/// `f64::INFINITY` sentinel; the distance/predecessor tables are still
/// returned as populated by the run. `start == end` yields the single-Node
/// route `[start]` with distance 0. Out-of-range endpoints are absorbed into
/// an all-infinite result rather than a panic.
///
/// Each call is pure and runs to completion; there is no solver state shared
/// between calls, which is what makes rerouting a fresh solve (see
/// [`RouteFollower`](crate::RouteFollower)).
pub fn solve(graph: &Graph, start: NodeId, end: NodeId) -> PathResult {
    let n = graph.len();
    if start as usize >= n || end as usize >= n {
        return PathResult::unreachable(n);
    }

    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; n];
    let mut visited = NodeIdSet::with_capacity_and_hasher(n, Default::default());

    distances[start as usize] = 0.0;

    for _ in 0..n {
        // unvisited Node with minimum tentative distance, lowest id on ties
        let mut current = None;
        let mut min_distance = f64::INFINITY;
        for id in 0..n as NodeId {
            if !visited.contains(&id) && distances[id as usize] < min_distance {
                min_distance = distances[id as usize];
                current = Some(id);
            }
        }

        let current = match current {
            Some(id) => id,
            // every still-unvisited Node is unreachable
            None => break,
        };
        visited.insert(current);

        let node = &graph[current];
        if node.blocked {
            // reachable in the tables, but not a Node that can be departed
            continue;
        }

        for &neighbor in &node.neighbors {
            if neighbor as usize >= n || visited.contains(&neighbor) {
                continue;
            }
            let target = &graph[neighbor];
            if target.blocked {
                continue;
            }
            let tentative = distances[current as usize] + node.distance_to(target);
            if tentative < distances[neighbor as usize] {
                distances[neighbor as usize] = tentative;
                predecessors[neighbor as usize] = Some(current);
            }
        }
    }

    let total_distance = distances[end as usize];
    let path = if total_distance.is_finite() {
        let mut steps = vec![end];
        let mut current = end;
        while let Some(prev) = predecessors[current as usize] {
            steps.push(prev);
            current = prev;
        }
        steps.reverse();
        steps
    } else {
        Vec::new()
    };

    trace!(
        "solve {} -> {}: {} hops, distance {}",
        start,
        end,
        path.len(),
        total_distance
    );

    PathResult::new(path, total_distance, distances, predecessors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_graph, GridConfig};

    /// 3x3 axial grid at unit spacing:
    /// ```no_code
    /// 0 1 2
    /// 3 4 5
    /// 6 7 8
    /// ```
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
    fn straight_line() {
        let graph = unit_grid();
        let result = solve(&graph, 0, 2);

        assert_eq!(result, vec![0, 1, 2]);
        assert_eq!(result.total_distance(), 2.0);
    }

    #[test]
    fn trivial() {
        let graph = unit_grid();
        let result = solve(&graph, 4, 4);

        assert_eq!(result, vec![4]);
        assert_eq!(result.total_distance(), 0.0);
        assert!(!result.is_unreachable());
    }

    #[test]
    fn trivial_on_blocked_node() {
        let mut graph = unit_grid();
        graph.toggle_blocked(4);
        let result = solve(&graph, 4, 4);

        // blocking prevents entering and departing, not already being there
        assert_eq!(result, vec![4]);
        assert_eq!(result.total_distance(), 0.0);
    }

    #[test]
    fn lowest_id_wins_ties() {
        let graph = unit_grid();
        let result = solve(&graph, 0, 8);

        // several routes have cost 4; the deterministic scan picks this one
        assert_eq!(result, vec![0, 1, 2, 5, 8]);
        assert_eq!(result.total_distance(), 4.0);
    }

    #[test]
    fn detour_around_blocked_node() {
        let mut graph = unit_grid();
        graph.toggle_blocked(1);
        let result = solve(&graph, 0, 2);

        assert_eq!(result, vec![0, 3, 4, 5, 2]);
        assert_eq!(result.total_distance(), 4.0);
    }

    #[test]
    fn blocked_target_is_unreachable() {
        let mut graph = unit_grid();
        graph.toggle_blocked(2);
        let result = solve(&graph, 0, 2);

        assert!(result.is_unreachable());
        assert!(result.nodes().is_empty());
    }

    #[test]
    fn blocked_start_cannot_be_departed() {
        let mut graph = unit_grid();
        graph.toggle_blocked(0);
        let result = solve(&graph, 0, 8);

        assert!(result.is_unreachable());
        assert_eq!(result.distance_to(0), Some(0.0));
    }

    #[test]
    fn cordoned_start_is_stuck() {
        let mut graph = unit_grid();
        graph.toggle_blocked(1);
        graph.toggle_blocked(3);
        let result = solve(&graph, 0, 8);

        assert!(result.is_unreachable());
        assert!(result.is_empty());
    }

    #[test]
    fn tables_survive_unreachable_results() {
        let mut graph = unit_grid();
        graph.toggle_blocked(8);
        let result = solve(&graph, 0, 8);

        assert!(result.is_unreachable());
        // the rest of the grid was still explored
        assert_eq!(result.distance_to(7), Some(3.0));
        assert_eq!(result.predecessor(7), Some(4));
        assert_eq!(result.distance_to(8), Some(f64::INFINITY));
        assert_eq!(result.predecessor(8), None);
    }

    #[test]
    fn out_of_range_endpoints_are_absorbed() {
        let graph = unit_grid();

        let result = solve(&graph, 0, 999);
        assert!(result.is_unreachable());
        assert!(result.is_empty());

        let result = solve(&graph, 999, 0);
        assert!(result.is_unreachable());
        assert!(result.is_empty());
    }

    #[test]
    fn diagonals_shorten_routes() {
        let config = GridConfig {
            node_count: 9,
            grid_width: 3,
            spacing: 1.0,
            origin: (0.0, 0.0),
            diagonal_chance: 1.0,
        };
        let graph = build_graph(&config, &mut || 0.0);
        let result = solve(&graph, 8, 0);

        // two upward diagonal hops, sqrt(2) each
        assert_eq!(result, vec![8, 4, 0]);
        assert!((result.total_distance() - 2.0 * 2.0_f64.sqrt()).abs() < 1e-9);
    }
}
