use crate::{navigation::RouteTableBuilder, views::View};

/// Authenticated Pages
///
/// Pages that require a valid session. Without one, navigation to any of
/// these paths redirects to the login page. All of them render inside the
/// main layout frame.
pub fn authenticated_pages(table: RouteTableBuilder<View>) -> RouteTableBuilder<View> {
    table
        // GET /dashboard
        // Landing page, and the default target for `/` and unknown paths.
        .protected("/dashboard", View::Dashboard)
        .protected("/donations", View::Donations)
        .protected("/products", View::Products)
        .protected("/inventory", View::Inventory)
        .protected("/donors", View::Donors)
        .protected("/waste", View::Waste)
        .protected(
            "/requests",
            View::Placeholder {
                message: "Requests Page - Coming Soon",
            },
        )
        .protected(
            "/organizations",
            View::Placeholder {
                message: "Organizations Page - Coming Soon",
            },
        )
        // GET /profile
        // The signed-in user's own account page.
        .protected("/profile", View::Profile)
}
