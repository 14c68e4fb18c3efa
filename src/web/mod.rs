//! Web server module
//!
//! Provides the JSON HTTP API: global search, catalog CRUD, admin login.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
