//! Application state for the web server.

use musee::{Catalog, Museum};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Catalog and assistant. Read-only, so no lock is needed.
    pub museum: Museum,
}

impl AppState {
    /// Create new application state.
    pub fn new(museum: Museum) -> Self {
        Self { museum }
    }

    pub fn catalog(&self) -> &Catalog {
        self.museum.catalog()
    }
}
