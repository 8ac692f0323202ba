//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Route;

/// Query for listing a city's stations.
#[derive(Debug, Deserialize)]
pub struct StationsQuery {
    /// City name (case-insensitive)
    pub city: String,
}

/// Response for the station list.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// City name as loaded
    pub city: String,

    /// Sorted station ids
    pub stations: Vec<String>,
}

/// Response for the city list.
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    /// Sorted city names
    pub cities: Vec<String>,
}

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// City whose network to route over
    pub city: String,

    /// Starting station id
    pub source: String,

    /// Final station id
    pub destination: String,

    /// Ordered intermediate stations the route must pass through
    #[serde(default)]
    pub via: Vec<String>,

    /// Metric label ("fastest", "shortest", "cheapest"); defaults to fastest
    pub metric: Option<String>,
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Ordered station ids from source to destination
    pub path: Vec<String>,

    /// Total travel time in minutes
    pub time: u32,

    /// Total distance in kilometres, one decimal place
    pub distance: f64,

    /// Total fare in currency units
    pub fare: u32,

    /// Number of hops (path length minus one)
    pub stops: usize,

    /// The metric label the route was optimized for
    pub metric: String,
}

impl RouteResult {
    /// Create from a domain Route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            path: route.path().iter().map(|s| s.as_str().to_string()).collect(),
            time: route.time(),
            distance: route.distance(),
            fare: route.fare(),
            stops: route.stops(),
            metric: route.metric().label().to_string(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
