//! Web server module
//!
//! Exposes aggregation over HTTP and validates the raw search string.

mod handlers;
mod routes;
mod state;

pub use handlers::{ProblemDetails, SearchParams};
pub use routes::create_router;
pub use state::AppState;
