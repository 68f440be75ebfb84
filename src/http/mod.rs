//! HTTP server with the demo endpoints and request logging middleware.

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod types;

pub use routes::build_router;
pub use state::AppState;
