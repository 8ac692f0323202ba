//! Waypoint routing: composing shortest-path segments into one route.

use crate::domain::{CostMetric, Route, StationId};
use crate::network::MetroGraph;

use super::solver::{RouteError, shortest_path};

/// A route query: where to start, where to finish, and which stations
/// the route must pass through on the way, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    /// Starting station.
    pub source: StationId,

    /// Final station.
    pub destination: StationId,

    /// Ordered intermediate stations the route must visit.
    pub waypoints: Vec<StationId>,

    /// The cost field to optimize.
    pub metric: CostMetric,
}

impl RouteRequest {
    /// Create a direct request with no waypoints.
    pub fn new(source: StationId, destination: StationId, metric: CostMetric) -> Self {
        Self {
            source,
            destination,
            waypoints: Vec::new(),
            metric,
        }
    }

    /// Set the ordered waypoints.
    pub fn with_waypoints(mut self, waypoints: Vec<StationId>) -> Self {
        self.waypoints = waypoints;
        self
    }

    /// The full visit order: source, waypoints, destination.
    fn visit_sequence(&self) -> Vec<StationId> {
        let mut points = Vec::with_capacity(self.waypoints.len() + 2);
        points.push(self.source.clone());
        points.extend(self.waypoints.iter().cloned());
        points.push(self.destination.clone());
        points
    }
}

/// Route planner over a borrowed, read-only network graph.
///
/// Each call to [`plan`](Self::plan) is a pure function of the request;
/// the planner holds no state between queries, so one planner can serve
/// concurrent requests against the same graph.
pub struct RoutePlanner<'a> {
    graph: &'a MetroGraph,
}

impl<'a> RoutePlanner<'a> {
    /// Create a planner for the given graph.
    pub fn new(graph: &'a MetroGraph) -> Self {
        Self { graph }
    }

    /// Plan a route through every waypoint in order.
    ///
    /// Decomposes the visit sequence into consecutive pairs and solves
    /// each with [`shortest_path`]. A direct request is simply the
    /// one-segment case of the same loop. Segments are stitched by
    /// dropping each later segment's first station, which duplicates the
    /// previous segment's last; time, distance and fare are summed and
    /// the stop count comes from the final path length.
    ///
    /// # Errors
    ///
    /// Fails fast with `RouteError::Unreachable` naming the first
    /// segment pair that has no path; no partial route is returned.
    pub fn plan(&self, request: &RouteRequest) -> Result<Route, RouteError> {
        let points = request.visit_sequence();

        let mut combined: Vec<StationId> = Vec::new();
        let mut time = 0u32;
        let mut distance = 0.0f64;
        let mut fare = 0u32;

        for pair in points.windows(2) {
            let segment = shortest_path(
                self.graph,
                pair[0].clone(),
                pair[1].clone(),
                request.metric,
            )?;

            if combined.is_empty() {
                combined.extend_from_slice(segment.path());
            } else {
                // The segment starts where the previous one ended
                combined.extend_from_slice(&segment.path()[1..]);
            }

            time += segment.time();
            distance += segment.distance();
            fare += segment.fare();
        }

        // Safe: the visit sequence always yields at least one segment
        Ok(Route::new(combined, time, distance, fare, request.metric)
            .expect("stitched path is non-empty"))
    }

    /// Plan a direct route between two stations.
    pub fn direct(
        &self,
        source: StationId,
        destination: StationId,
        metric: CostMetric,
    ) -> Result<Route, RouteError> {
        self.plan(&RouteRequest::new(source, destination, metric))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::network::{EdgeCosts, MetroGraph};
    use proptest::prelude::*;

    fn sid(i: usize) -> StationId {
        StationId::parse(&format!("S{}", i)).unwrap()
    }

    /// A connected random graph: a spanning chain plus random extras.
    fn connected_graph() -> impl Strategy<Value = MetroGraph> {
        let extra = (0usize..6, 0usize..6, 1u32..20, 1u32..50u32, 1u32..30);
        proptest::collection::vec(extra, 0..10).prop_map(|extras| {
            let mut graph = MetroGraph::new();
            for i in 0..5 {
                graph.add_connection(sid(i), sid(i + 1), EdgeCosts::new(5, 1.0, 10));
            }
            for (a, b, time, tenths, fare) in extras {
                if a == b {
                    continue;
                }
                graph.add_connection(
                    sid(a),
                    sid(b),
                    EdgeCosts::new(time, f64::from(tenths) / 10.0, fare),
                );
            }
            graph
        })
    }

    proptest! {
        /// Waypoint stitching never leaves a duplicated boundary station:
        /// no two consecutive path entries are equal.
        #[test]
        fn no_consecutive_duplicates(
            graph in connected_graph(),
            a in 0usize..6,
            b in 0usize..6,
            ws in proptest::collection::vec(0usize..6, 0..3),
        ) {
            let planner = RoutePlanner::new(&graph);
            let request = RouteRequest::new(sid(a), sid(b), CostMetric::Time)
                .with_waypoints(ws.into_iter().map(sid).collect());

            let route = planner.plan(&request).unwrap();
            for pair in route.path().windows(2) {
                prop_assert_ne!(&pair[0], &pair[1]);
            }
            prop_assert_eq!(route.stops(), route.path().len() - 1);
        }

        /// The stitched totals equal the sums over the segment solves.
        #[test]
        fn totals_are_additive(
            graph in connected_graph(),
            a in 0usize..6,
            b in 0usize..6,
            w in 0usize..6,
        ) {
            let planner = RoutePlanner::new(&graph);
            let request = RouteRequest::new(sid(a), sid(b), CostMetric::Time)
                .with_waypoints(vec![sid(w)]);
            let route = planner.plan(&request).unwrap();

            let first = shortest_path(&graph, sid(a), sid(w), CostMetric::Time).unwrap();
            let second = shortest_path(&graph, sid(w), sid(b), CostMetric::Time).unwrap();

            prop_assert_eq!(route.time(), first.time() + second.time());
            prop_assert_eq!(route.fare(), first.fare() + second.fare());
        }

        /// A zero-waypoint plan is exactly the solver's answer.
        #[test]
        fn direct_plan_equals_solver(graph in connected_graph(), a in 0usize..6, b in 0usize..6) {
            let planner = RoutePlanner::new(&graph);
            let planned = planner.direct(sid(a), sid(b), CostMetric::Time);
            let solved = shortest_path(&graph, sid(a), sid(b), CostMetric::Time);
            prop_assert_eq!(planned, solved);
        }
    }
}
