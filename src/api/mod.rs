//! HTTP API module for health, market, arbitrage, and alert endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
