//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Global search
        .route("/api/search", get(handlers::search))
        // Admin
        .route("/api/admin/login", post(handlers::admin_login))
        // Universities
        .route(
            "/api/universities",
            get(handlers::list_universities).post(handlers::create_university),
        )
        .route(
            "/api/universities/:id",
            axum::routing::put(handlers::update_university).delete(handlers::delete_university),
        )
        // Colleges
        .route(
            "/api/universities/:uni_key/colleges",
            get(handlers::list_colleges),
        )
        .route("/api/colleges", post(handlers::create_college))
        .route(
            "/api/colleges/:id",
            axum::routing::put(handlers::update_college).delete(handlers::delete_college),
        )
        // Majors
        .route(
            "/api/universities/:uni_key/colleges/:college_key/majors",
            get(handlers::list_majors),
        )
        .route(
            "/api/universities/:uni_key/colleges/:college_key/majors/:major_id",
            get(handlers::get_major),
        )
        .route("/api/majors", post(handlers::create_major))
        .route(
            "/api/majors/:id",
            axum::routing::put(handlers::update_major).delete(handlers::delete_major),
        )
        // API routes
        .route("/health", get(handlers::health))
        // Add middleware
        .layer(cors)
        // Add state
        .with_state(state)
}
