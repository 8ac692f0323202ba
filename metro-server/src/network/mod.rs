//! Metro network data: the weighted graph, city network files, and the
//! catalog of loaded cities.

mod catalog;
mod demo;
mod graph;

pub use catalog::{CityNetwork, NetworkCatalog, NetworkError};
pub use demo::demo_network;
pub use graph::{EdgeCosts, MetroGraph, MetroGraphBuilder};
