//! Route planning over a city's metro graph.
//!
//! The solver answers single-pair queries with Dijkstra's algorithm;
//! the planner composes solver calls to honor ordered waypoints and
//! stitches the partial paths into one route with additive metrics.

mod router;
mod solver;

pub use router::{RoutePlanner, RouteRequest};
pub use solver::{RouteError, shortest_path};
