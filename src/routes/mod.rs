//! Route Module Index
//!
//! Declares the application's page routes split by access requirement, and
//! the HTTP API the browser bundle uses to share the same table. The access
//! requirement of every path is visible in the module that declares it.

use crate::{
    navigation::{RouteTable, TableError},
    views::View,
};

/// Pages reachable without a session.
pub mod public;

/// Pages that require an authenticated session and render inside the main layout.
pub mod authenticated;

/// JSON API and health endpoints.
pub mod api;

/// Where `/` and every unknown path redirect to.
pub const DEFAULT_PATH: &str = "/dashboard";

/// Where protected paths redirect to when there is no session.
pub const LOGIN_PATH: &str = "/login";

/// page_table
///
/// Builds the application's route table: public pages first, then the
/// authenticated pages, with `/dashboard` as the default target.
///
/// # Errors
/// Returns a `TableError` if the declarations break a table invariant. This
/// can only happen through an editing mistake in the page modules.
pub fn page_table() -> Result<RouteTable<View>, TableError> {
    let builder = RouteTable::builder()
        .default_path(DEFAULT_PATH)
        .login_path(LOGIN_PATH);
    let builder = public::public_pages(builder);
    authenticated::authenticated_pages(builder).build()
}
