//! HTTP API module for the salary statistics engine.
//!
//! Serves calculated salaries and aggregated statistics as JSON, for
//! consumption by dashboards and other presentation clients.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
