//! Application state for the web layer.

use std::sync::Arc;

use crate::network::NetworkCatalog;

/// Shared application state.
///
/// The catalog is loaded once at startup and only ever read afterward,
/// so concurrent requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// City networks available to route over
    pub catalog: Arc<NetworkCatalog>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: NetworkCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
