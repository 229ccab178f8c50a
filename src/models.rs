use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};

use crate::{
    navigation::{Decision, RouteEntry, RouteTable},
    views::View,
};

// --- Response Schemas ---

/// ViewDescriptor
///
/// Serializable identity of a view: the component to mount and, for
/// placeholder pages, the message they show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ViewDescriptor {
    pub component: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub message: Option<String>,
}

impl From<&View> for ViewDescriptor {
    fn from(view: &View) -> Self {
        Self {
            component: view.component().to_string(),
            message: view.message().map(str::to_string),
        }
    }
}

/// Access
///
/// Whether a rendered view was reached through a public or a protected entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Access {
    Public,
    Protected,
}

/// RedirectReason
///
/// Why a navigation was redirected: a protected page without a session
/// (`login`), or the root/unknown path policy (`default`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RedirectReason {
    Login,
    Default,
}

/// NavigationDecision
///
/// Wire form of a resolution result, returned by
/// `GET /api/navigation/resolve`. Redirects always carry `replace: true`:
/// the client must replace the current history entry, not push a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum NavigationDecision {
    Render {
        view: ViewDescriptor,
        access: Access,
        /// True when the view renders inside the main layout frame.
        layout: bool,
    },
    Redirect {
        to: String,
        reason: RedirectReason,
        replace: bool,
    },
}

impl From<Decision<'_, View>> for NavigationDecision {
    fn from(decision: Decision<'_, View>) -> Self {
        match decision {
            Decision::RenderPublic(view) => NavigationDecision::Render {
                view: view.into(),
                access: Access::Public,
                layout: false,
            },
            Decision::RenderProtected(view) => NavigationDecision::Render {
                view: view.into(),
                access: Access::Protected,
                layout: true,
            },
            Decision::RedirectToLogin(to) => NavigationDecision::Redirect {
                to: to.to_string(),
                reason: RedirectReason::Login,
                replace: true,
            },
            Decision::RedirectToDefault(to) => NavigationDecision::Redirect {
                to: to.to_string(),
                reason: RedirectReason::Default,
                replace: true,
            },
        }
    }
}

/// RouteDescriptor
///
/// One entry of the page table as published to the browser bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct RouteDescriptor {
    pub path: String,
    pub requires_auth: bool,
    pub view: ViewDescriptor,
    // Protected entries share the main layout; public ones render bare.
    pub layout: bool,
}

impl From<&RouteEntry<View>> for RouteDescriptor {
    fn from(entry: &RouteEntry<View>) -> Self {
        Self {
            path: entry.path.clone(),
            requires_auth: entry.requires_auth,
            view: (&entry.view).into(),
            layout: entry.requires_auth,
        }
    }
}

/// RouteCatalog
///
/// Response of `GET /api/navigation/routes`: every entry in table order plus
/// the two redirect targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct RouteCatalog {
    pub routes: Vec<RouteDescriptor>,
    pub default_path: String,
    pub login_path: String,
}

impl From<&RouteTable<View>> for RouteCatalog {
    fn from(table: &RouteTable<View>) -> Self {
        Self {
            routes: table.entries().iter().map(RouteDescriptor::from).collect(),
            default_path: table.default_path().to_string(),
            login_path: table.login_path().to_string(),
        }
    }
}

// --- Request Parameters ---

/// ResolveQuery
///
/// Query string of `GET /api/navigation/resolve`. A missing `path` resolves
/// like any other unknown path.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResolveQuery {
    /// The absolute path to resolve, e.g. `/inventory`.
    #[serde(default)]
    pub path: String,
}
