use std::sync::Arc;

use axum::{Router, extract::FromRef, http::HeaderName};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core navigation logic and its collaborators.
pub mod auth;
pub mod config;
pub mod handlers;
pub mod layout;
pub mod models;
pub mod navigation;
pub mod views;

// Page declarations (public / authenticated) and the HTTP API routes.
pub mod routes;
use routes::api;

// --- Public Re-exports ---

pub use config::AppConfig;
pub use layout::{Layout, LayoutState, MainLayout};
pub use navigation::{Decision, RouteTable, TableError};
pub use views::View;

/// TableState
///
/// The page table, built once at startup and shared read-only.
pub type TableState = Arc<RouteTable<View>>;

/// ApiDoc
///
/// OpenAPI description of the navigation API, served at
/// `/api-docs/openapi.json` and browsable under `/swagger-ui`.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::list_routes, handlers::resolve_navigation),
    components(
        schemas(
            models::NavigationDecision, models::ViewDescriptor, models::Access,
            models::RedirectReason, models::RouteDescriptor, models::RouteCatalog,
        )
    ),
    tags(
        (name = "navigation", description = "Food donation portal navigation API")
    )
)]
struct ApiDoc;

/// AppState
///
/// Everything a request needs: the page table, the layout collaborator and
/// the configuration. Cheap to clone; all parts are shared.
#[derive(Clone)]
pub struct AppState {
    pub table: TableState,
    pub layout: LayoutState,
    pub config: AppConfig,
}

impl AppState {
    /// Builds the state around the given table with the default main layout.
    pub fn new(table: RouteTable<View>, config: AppConfig) -> Self {
        Self {
            table: Arc::new(table),
            layout: Arc::new(MainLayout),
            config,
        }
    }
}

// --- Axum FromRef Extractor Implementations ---

impl FromRef<AppState> for TableState {
    fn from_ref(app_state: &AppState) -> TableState {
        app_state.table.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the HTTP surface: API routes, Swagger UI, the static bundle
/// under `/assets`, and the navigation fallback that resolves every other
/// path against the page table.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let x_request_id = HeaderName::from_static("x-request-id");

    let base_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api::api_routes())
        .nest_service("/assets", ServeDir::new(&state.config.assets_dir))
        // Page navigations: authorization is decided by the page table, not by route layers.
        .fallback(handlers::navigate)
        .with_state(state);

    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    x_request_id.clone(),
                    MakeRequestUuid,
                ))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Span for `TraceLayer` carrying the method, URI and `x-request-id`, so
/// every log line of one request can be correlated.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
