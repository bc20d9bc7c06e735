use campus_auth::SessionManager;
use campus_catalog::Catalog;

/// Application state shared across all handlers.
pub struct AppState {
    pub sessions: SessionManager,
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(sessions: SessionManager, catalog: Catalog) -> Self {
        Self { sessions, catalog }
    }
}
