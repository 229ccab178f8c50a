use crate::{navigation::RouteTableBuilder, views::View};

/// Public Pages
///
/// Pages that render for anyone, signed in or not. Authentication status has
/// no effect on these paths.
pub fn public_pages(table: RouteTableBuilder<View>) -> RouteTableBuilder<View> {
    table
        // GET /login
        // Sign-in form. Also the redirect target for protected paths without a session.
        .public("/login", View::Login)
        // GET /register
        // Account creation form.
        .public("/register", View::Register)
}
