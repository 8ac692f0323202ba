//! City network files and the multi-city catalog.
//!
//! Each city's network is defined as a JSON edge list. The server loads
//! every network it finds at startup into a `NetworkCatalog`, which the
//! web layer consults per request. Networks are immutable once loaded.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::StationId;

use super::graph::{EdgeCosts, MetroGraph};

/// Errors from loading or validating a city network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Reading a network file failed
    #[error("failed to read network file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid JSON for the network format
    #[error("failed to parse network file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The network name is empty
    #[error("network name must not be empty")]
    EmptyName,

    /// An edge references an invalid station id
    #[error("invalid station id in edge {from:?} -> {to:?}")]
    InvalidStation { from: String, to: String },

    /// An edge carries a negative or non-finite distance
    #[error("invalid distance {value} on edge {from:?} -> {to:?}")]
    InvalidDistance {
        from: String,
        to: String,
        value: f64,
    },
}

/// One edge in a network file.
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    from: String,
    to: String,
    time: u32,
    distance: f64,
    fare: u32,
    /// Directed edge; the default is a symmetric connection.
    #[serde(default)]
    oneway: bool,
}

/// On-disk network file: a name and an edge list.
#[derive(Debug, Deserialize)]
struct NetworkFile {
    name: String,
    edges: Vec<EdgeRecord>,
}

/// A named city network: the graph plus the city it belongs to.
#[derive(Debug, Clone)]
pub struct CityNetwork {
    name: String,
    graph: MetroGraph,
}

impl CityNetwork {
    /// Create a city network from an already-built graph.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the name is empty.
    pub fn new(name: impl Into<String>, graph: MetroGraph) -> Result<Self, NetworkError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(NetworkError::EmptyName);
        }
        Ok(Self { name, graph })
    }

    /// Parse a city network from its JSON file contents.
    ///
    /// Validates every edge: station ids must parse (surrounding
    /// whitespace is trimmed), distances must be finite and non-negative.
    pub fn from_json_str(contents: &str) -> Result<Self, NetworkError> {
        let file: NetworkFile = serde_json::from_str(contents)?;

        let mut graph = MetroGraph::new();
        for edge in &file.edges {
            let (from, to) = match (
                StationId::parse_normalized(&edge.from),
                StationId::parse_normalized(&edge.to),
            ) {
                (Ok(from), Ok(to)) => (from, to),
                _ => {
                    return Err(NetworkError::InvalidStation {
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                    });
                }
            };

            if !edge.distance.is_finite() || edge.distance < 0.0 {
                return Err(NetworkError::InvalidDistance {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    value: edge.distance,
                });
            }

            let costs = EdgeCosts::new(edge.time, edge.distance, edge.fare);
            if edge.oneway {
                graph.add_edge(from, to, costs);
            } else {
                graph.add_connection(from, to, costs);
            }
        }

        CityNetwork::new(file.name, graph)
    }

    /// Load a city network from a JSON file on disk.
    pub fn from_json_file(path: &Path) -> Result<Self, NetworkError> {
        let contents = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// The city name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The network graph.
    pub fn graph(&self) -> &MetroGraph {
        &self.graph
    }
}

/// The set of city networks the server knows about.
///
/// Lookup is by case-insensitive city name. The catalog is built at
/// startup and shared read-only between requests.
#[derive(Debug, Clone, Default)]
pub struct NetworkCatalog {
    networks: HashMap<String, CityNetwork>,
}

impl NetworkCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a network, replacing any previous network for the same city.
    pub fn insert(&mut self, network: CityNetwork) {
        self.networks
            .insert(network.name().to_lowercase(), network);
    }

    /// Look up a city's network by name, case-insensitively.
    pub fn get(&self, city: &str) -> Option<&CityNetwork> {
        self.networks.get(&city.trim().to_lowercase())
    }

    /// Sorted list of known city names.
    pub fn cities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.networks.values().map(|n| n.name()).collect();
        names.sort_unstable();
        names
    }

    /// Number of networks in the catalog.
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// True if no networks are loaded.
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Load every `*.json` network file from a directory.
    ///
    /// Returns the number of networks loaded. Stops at the first
    /// malformed file rather than serving a partial city.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, NetworkError> {
        let entries = std::fs::read_dir(dir).map_err(|source| NetworkError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut loaded = 0;
        for entry in entries {
            let entry = entry.map_err(|source| NetworkError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                self.insert(CityNetwork::from_json_file(&path)?);
                loaded += 1;
            }
        }
        Ok(loaded)
    }
}
