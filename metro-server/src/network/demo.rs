//! Built-in demo network.
//!
//! A small two-line metro modelled on the central Delhi network, so the
//! server answers queries out of the box without any network files.

use super::catalog::CityNetwork;
use super::graph::MetroGraphBuilder;

/// Create the built-in demo city network.
///
/// Two lines crossing at Rajiv Chowk: the Yellow line running north to
/// south and the Blue line running west to east. Edge times are minutes,
/// distances kilometres, fares rupees per segment.
pub fn demo_network() -> CityNetwork {
    let graph = MetroGraphBuilder::new()
        // Yellow line, north to south
        .connection("Kashmere Gate", "Chandni Chowk", 3, 1.4, 10)
        .connection("Chandni Chowk", "Chawri Bazar", 2, 1.0, 10)
        .connection("Chawri Bazar", "New Delhi", 2, 1.1, 10)
        .connection("New Delhi", "Rajiv Chowk", 3, 1.3, 10)
        .connection("Rajiv Chowk", "Patel Chowk", 3, 1.5, 10)
        .connection("Patel Chowk", "Central Secretariat", 2, 1.2, 10)
        // Blue line, west to east
        .connection("Dwarka", "Janakpuri West", 6, 4.1, 20)
        .connection("Janakpuri West", "Rajouri Garden", 5, 3.6, 20)
        .connection("Rajouri Garden", "Kirti Nagar", 4, 2.4, 10)
        .connection("Kirti Nagar", "Karol Bagh", 4, 2.8, 10)
        .connection("Karol Bagh", "Rajiv Chowk", 5, 3.0, 10)
        .connection("Rajiv Chowk", "Mandi House", 4, 2.2, 10)
        .connection("Mandi House", "Yamuna Bank", 6, 4.3, 20)
        .build();

    // Name is static and non-empty, construction cannot fail
    CityNetwork::new("Delhi", graph).expect("demo network name is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn station(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    #[test]
    fn demo_network_shape() {
        let network = demo_network();

        assert_eq!(network.name(), "Delhi");
        assert_eq!(network.graph().station_count(), 14);

        // Rajiv Chowk is the interchange: two Yellow + two Blue neighbors
        assert_eq!(network.graph().neighbors(&station("Rajiv Chowk")).count(), 4);
    }

    #[test]
    fn demo_network_connected() {
        use crate::domain::CostMetric;
        use crate::planner::shortest_path;

        let network = demo_network();
        let graph = network.graph();

        // Every station reaches every other station
        let stations: Vec<_> = graph.stations().cloned().collect();
        for from in &stations {
            for to in &stations {
                let result = shortest_path(graph, from.clone(), to.clone(), CostMetric::Time);
                assert!(result.is_ok(), "no route {} -> {}", from, to);
            }
        }
    }
}
