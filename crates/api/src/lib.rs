pub mod admin_handlers;
pub mod auth_handlers;
pub mod catalog_handlers;
pub mod dashboard_handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use state::AppState;
