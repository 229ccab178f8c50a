use crate::{
    AppState, TableState,
    auth::Session,
    layout,
    models::{NavigationDecision, ResolveQuery, RouteCatalog},
    navigation::Decision,
    views::View,
};
use axum::{
    Json,
    extract::{Query, State},
    http::{Uri, header},
    response::{Html, IntoResponse, Redirect, Response},
};

/// Decisions depend on the session, so no navigation response may be cached.
const NO_STORE: [(header::HeaderName, &str); 1] = [(header::CACHE_CONTROL, "no-store")];

/// Script the HTML shell loads to boot the browser bundle.
pub const BUNDLE_ENTRY: &str = "/assets/index.js";

// --- Handlers ---

/// list_routes
///
/// [Public Route] Publishes the page table so the browser bundle can build
/// its client-side routes from the same source of truth.
#[utoipa::path(
    get,
    path = "/api/navigation/routes",
    responses((status = 200, description = "Page table", body = RouteCatalog))
)]
pub async fn list_routes(State(table): State<TableState>) -> Json<RouteCatalog> {
    Json(RouteCatalog::from(table.as_ref()))
}

/// resolve_navigation
///
/// [Public Route] Resolves `path` for the caller's session. Used by the
/// browser bundle on client-side navigations; the caller acts on the
/// returned decision (render, or replace-navigate to `to`).
#[utoipa::path(
    get,
    path = "/api/navigation/resolve",
    params(ResolveQuery),
    responses((status = 200, description = "Navigation decision", body = NavigationDecision))
)]
pub async fn resolve_navigation(
    session: Session,
    State(table): State<TableState>,
    Query(query): Query<ResolveQuery>,
) -> impl IntoResponse {
    let decision = table.resolve(&query.path, session.is_authenticated());
    log_decision(&query.path, &session, &decision);

    (NO_STORE, Json(NavigationDecision::from(decision)))
}

/// navigate
///
/// Fallback for every path not claimed by the API: the full-page-load entry
/// point. Resolves the request path and either serves the HTML shell with
/// the view mounted (inside the main layout for protected views) or answers
/// `303 See Other`, which the browser follows without adding a history entry.
pub async fn navigate(session: Session, State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();
    let decision = state.table.resolve(path, session.is_authenticated());
    log_decision(path, &session, &decision);

    let body = match decision {
        Decision::RenderPublic(view) => view.mount_markup(),
        Decision::RenderProtected(view) => state.layout.frame(&view.mount_markup()),
        Decision::RedirectToLogin(to) | Decision::RedirectToDefault(to) => {
            return (NO_STORE, Redirect::to(to)).into_response();
        }
    };

    let page = layout::document(&state.config.app_title, BUNDLE_ENTRY, &body);
    (NO_STORE, Html(page)).into_response()
}

fn log_decision(path: &str, session: &Session, decision: &Decision<'_, View>) {
    tracing::debug!(
        path = %path,
        authenticated = session.is_authenticated(),
        outcome = decision.outcome(),
        target = decision.redirect_target().unwrap_or(""),
        "navigation resolved"
    );
}
