//! Dijkstra shortest-path search.
//!
//! Finds the minimum-cost path between two stations for a selected cost
//! metric, then reports totals for every cost field along that path.

use std::cmp::Ordering;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::domain::{CostMetric, Route, StationId};
use crate::network::MetroGraph;

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// No path exists between two required stations
    #[error("no route between {from} and {to}")]
    Unreachable { from: StationId, to: StationId },

    /// The network has no stations at all
    #[error("the network has no stations")]
    EmptyGraph,
}

/// Tentative path cost.
///
/// Costs are finite and non-negative (edge costs are validated at load
/// time), so `total_cmp` agrees with numeric order.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Find the minimum-cost path from `start` to `end` on the given metric.
///
/// Classic Dijkstra over a binary min-heap keyed on
/// `(tentative cost, station id)` with lazy deletion. The secondary key
/// makes tie-breaking deterministic: among equal-cost frontier
/// candidates, the lexicographically smallest station id is finalized
/// first, and a later equal-cost relaxation never displaces an
/// already-recorded predecessor.
///
/// The returned route's totals sum every cost field along the path, not
/// only the optimized metric, reading each consecutive pair in whichever
/// direction the graph stores it.
///
/// # Errors
///
/// - `RouteError::EmptyGraph` if the network has no stations.
/// - `RouteError::Unreachable` if no path exists, including when either
///   endpoint is unknown to the graph. A same-station query on a known
///   station is not an error: it yields the trivial single-station route.
pub fn shortest_path(
    graph: &MetroGraph,
    start: StationId,
    end: StationId,
    metric: CostMetric,
) -> Result<Route, RouteError> {
    if graph.is_empty() {
        return Err(RouteError::EmptyGraph);
    }

    if start == end {
        if graph.contains(&start) {
            return Ok(Route::trivial(start, metric));
        }
        return Err(RouteError::Unreachable {
            from: start,
            to: end,
        });
    }

    let mut dist: HashMap<StationId, f64> = HashMap::new();
    let mut prev: HashMap<StationId, StationId> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<(Cost, StationId)>> = BinaryHeap::new();

    dist.insert(start.clone(), 0.0);
    heap.push(Reverse((Cost(0.0), start.clone())));

    while let Some(Reverse((Cost(cost), node))) = heap.pop() {
        if node == end {
            break;
        }

        // Lazy deletion: skip entries superseded by a cheaper relaxation
        if dist.get(&node).is_some_and(|&d| cost > d) {
            continue;
        }

        for (neighbor, costs) in graph.neighbors(&node) {
            let alt = cost + costs.metric_value(metric);
            if dist.get(neighbor).is_none_or(|&d| alt < d) {
                dist.insert(neighbor.clone(), alt);
                prev.insert(neighbor.clone(), node.clone());
                heap.push(Reverse((Cost(alt), neighbor.clone())));
            }
        }
    }

    reconstruct(graph, &prev, start, end, metric)
}

/// Walk the predecessor table backward from `end` and total up the costs.
fn reconstruct(
    graph: &MetroGraph,
    prev: &HashMap<StationId, StationId>,
    start: StationId,
    end: StationId,
    metric: CostMetric,
) -> Result<Route, RouteError> {
    if !prev.contains_key(&end) {
        return Err(RouteError::Unreachable {
            from: start,
            to: end,
        });
    }

    let mut path = vec![end];
    loop {
        let Some(predecessor) = prev.get(path.last().expect("path starts non-empty")) else {
            break;
        };
        path.push(predecessor.clone());
    }
    path.reverse();
    debug_assert_eq!(path.first(), Some(&start));

    let mut time = 0u32;
    let mut distance = 0.0f64;
    let mut fare = 0u32;
    for pair in path.windows(2) {
        // Edges on a reconstructed path always resolve in one direction
        // or the other; a miss contributes nothing, like the lookup rule.
        if let Some(costs) = graph.costs_between(&pair[0], &pair[1]) {
            time += costs.time;
            distance += costs.distance;
            fare += costs.fare;
        }
    }

    // Safe: path contains at least `end`
    Ok(Route::new(path, time, distance, fare, metric).expect("reconstructed path is non-empty"))
}
