use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// API Router Module
///
/// Endpoints under `/api/navigation` expose the page table to the browser
/// bundle so client-side navigation follows the same rules as full page
/// loads. Both are readable without a session; the resolve endpoint simply
/// reports what the current session would see.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Liveness probe for load balancers. Returns "ok" immediately.
        .route("/health", get(|| async { "ok" }))
        // GET /api/navigation/routes
        // The full page table: paths, access requirement, view and layout flag.
        .route("/api/navigation/routes", get(handlers::list_routes))
        // GET /api/navigation/resolve?path=...
        // Resolves one path for the caller's session and returns the decision.
        .route("/api/navigation/resolve", get(handlers::resolve_navigation))
}
