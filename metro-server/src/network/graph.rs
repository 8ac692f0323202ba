//! Weighted adjacency graph for a city's metro network.

use std::collections::HashMap;

use crate::domain::{CostMetric, StationId};

/// The cost bundle carried by a single connection.
///
/// All fields are static for the lifetime of a query; the planner
/// optimizes one of them and reports totals for all three.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeCosts {
    /// Travel time in minutes.
    pub time: u32,
    /// Distance in kilometres.
    pub distance: f64,
    /// Fare in currency units.
    pub fare: u32,
}

impl EdgeCosts {
    /// Create a cost bundle.
    pub fn new(time: u32, distance: f64, fare: u32) -> Self {
        Self {
            time,
            distance,
            fare,
        }
    }

    /// The value of the selected metric, as the scalar the planner ranks by.
    pub fn metric_value(&self, metric: CostMetric) -> f64 {
        match metric {
            CostMetric::Time => f64::from(self.time),
            CostMetric::Distance => self.distance,
            CostMetric::Fare => f64::from(self.fare),
        }
    }
}

/// A city's metro network as a weighted adjacency graph.
///
/// Maps each station to its neighbors and the edge costs to reach them.
/// Every station referenced as a neighbor is also registered as a key,
/// so `stations()` enumerates the whole network. The graph is read-only
/// during route computation; concurrent queries share it freely.
#[derive(Debug, Clone, Default)]
pub struct MetroGraph {
    adjacency: HashMap<StationId, HashMap<StationId, EdgeCosts>>,
}

impl MetroGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directed edge from `from` to `to`.
    ///
    /// Registers both endpoints as stations; `to` gains an entry even if
    /// it has no outgoing edges of its own.
    pub fn add_edge(&mut self, from: StationId, to: StationId, costs: EdgeCosts) {
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency.entry(from).or_default().insert(to, costs);
    }

    /// Add an undirected connection: an edge in both directions with the
    /// same costs. Metro segments are almost always symmetric.
    pub fn add_connection(&mut self, a: StationId, b: StationId, costs: EdgeCosts) {
        self.add_edge(a.clone(), b.clone(), costs);
        self.add_edge(b, a, costs);
    }

    /// True if the station is known to this network, whether or not it
    /// has outgoing edges.
    pub fn contains(&self, station: &StationId) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Iterate over the stations reachable one hop from `station`.
    ///
    /// Yields nothing for a station with no outgoing edges, including
    /// stations the graph has never heard of.
    pub fn neighbors(&self, station: &StationId) -> impl Iterator<Item = (&StationId, EdgeCosts)> {
        self.adjacency
            .get(station)
            .into_iter()
            .flatten()
            .map(|(neighbor, costs)| (neighbor, *costs))
    }

    /// The costs between two adjacent stations, trying both directions.
    ///
    /// City data may store a connection's costs on only one side; a
    /// lookup checks `a -> b` first, then `b -> a`, before treating the
    /// pair as disconnected.
    pub fn costs_between(&self, a: &StationId, b: &StationId) -> Option<EdgeCosts> {
        self.adjacency
            .get(a)
            .and_then(|neighbors| neighbors.get(b))
            .or_else(|| self.adjacency.get(b).and_then(|neighbors| neighbors.get(a)))
            .copied()
    }

    /// Iterate over all stations in the network.
    pub fn stations(&self) -> impl Iterator<Item = &StationId> {
        self.adjacency.keys()
    }

    /// Number of stations in the network.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// True if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Builder for assembling a metro graph from literal data.
///
/// Station ids that fail validation are skipped, so a static network
/// definition cannot panic at startup.
#[derive(Debug, Default)]
pub struct MetroGraphBuilder {
    inner: MetroGraph,
}

impl MetroGraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an undirected connection between two stations.
    pub fn connection(mut self, a: &str, b: &str, time: u32, distance: f64, fare: u32) -> Self {
        if let (Ok(a), Ok(b)) = (StationId::parse(a), StationId::parse(b)) {
            self.inner.add_connection(a, b, EdgeCosts::new(time, distance, fare));
        }
        self
    }

    /// Add a directed edge (for the rare one-way interchange link).
    pub fn oneway(mut self, from: &str, to: &str, time: u32, distance: f64, fare: u32) -> Self {
        if let (Ok(from), Ok(to)) = (StationId::parse(from), StationId::parse(to)) {
            self.inner.add_edge(from, to, EdgeCosts::new(time, distance, fare));
        }
        self
    }

    /// Build the graph.
    pub fn build(self) -> MetroGraph {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    #[test]
    fn empty_graph() {
        let graph = MetroGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.station_count(), 0);
        assert!(!graph.contains(&station("A")));
        assert_eq!(graph.neighbors(&station("A")).count(), 0);
    }

    #[test]
    fn add_edge_registers_both_endpoints() {
        let mut graph = MetroGraph::new();
        graph.add_edge(station("A"), station("B"), EdgeCosts::new(5, 2.0, 10));

        assert_eq!(graph.station_count(), 2);
        assert!(graph.contains(&station("A")));
        assert!(graph.contains(&station("B")));

        // Directed: B has no outgoing edges
        assert_eq!(graph.neighbors(&station("A")).count(), 1);
        assert_eq!(graph.neighbors(&station("B")).count(), 0);
    }

    #[test]
    fn add_connection_is_symmetric() {
        let mut graph = MetroGraph::new();
        graph.add_connection(station("A"), station("B"), EdgeCosts::new(5, 2.0, 10));

        assert_eq!(graph.neighbors(&station("A")).count(), 1);
        assert_eq!(graph.neighbors(&station("B")).count(), 1);
    }

    #[test]
    fn costs_between_tries_both_directions() {
        let mut graph = MetroGraph::new();
        // Stored on one side only
        graph.add_edge(station("A"), station("B"), EdgeCosts::new(5, 2.0, 10));

        let forward = graph.costs_between(&station("A"), &station("B")).unwrap();
        let reverse = graph.costs_between(&station("B"), &station("A")).unwrap();
        assert_eq!(forward, reverse);
        assert_eq!(forward.time, 5);

        assert!(graph.costs_between(&station("A"), &station("C")).is_none());
    }

    #[test]
    fn metric_value_selects_field() {
        let costs = EdgeCosts::new(5, 2.5, 10);
        assert_eq!(costs.metric_value(CostMetric::Time), 5.0);
        assert_eq!(costs.metric_value(CostMetric::Distance), 2.5);
        assert_eq!(costs.metric_value(CostMetric::Fare), 10.0);
    }

    #[test]
    fn builder() {
        let graph = MetroGraphBuilder::new()
            .connection("A", "B", 5, 2.0, 10)
            .connection("B", "C", 3, 1.5, 10)
            .oneway("C", "A", 10, 4.0, 20)
            .build();

        assert_eq!(graph.station_count(), 3);
        assert!(graph.costs_between(&station("A"), &station("B")).is_some());
        // Oneway edge still resolves in both directions via costs_between
        assert!(graph.costs_between(&station("A"), &station("C")).is_some());
        // But traversal out of A goes only to B
        let from_a: Vec<_> = graph.neighbors(&station("A")).collect();
        assert_eq!(from_a.len(), 1);
    }

    #[test]
    fn builder_skips_invalid_ids() {
        let graph = MetroGraphBuilder::new()
            .connection("", "B", 5, 2.0, 10)
            .connection("A ", "B", 5, 2.0, 10)
            .connection("A", "B", 5, 2.0, 10)
            .build();

        assert_eq!(graph.station_count(), 2);
    }
}
