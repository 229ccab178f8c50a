use foodshare_portal::{
    Decision, RouteTable, TableError, View,
    routes::{DEFAULT_PATH, LOGIN_PATH, page_table},
};

// --- Helper Functions ---

const PUBLIC_PAGES: [(&str, View); 2] = [("/login", View::Login), ("/register", View::Register)];

const PROTECTED_PAGES: [(&str, View); 9] = [
    ("/dashboard", View::Dashboard),
    ("/donations", View::Donations),
    ("/products", View::Products),
    ("/inventory", View::Inventory),
    ("/donors", View::Donors),
    ("/waste", View::Waste),
    (
        "/requests",
        View::Placeholder {
            message: "Requests Page - Coming Soon",
        },
    ),
    (
        "/organizations",
        View::Placeholder {
            message: "Organizations Page - Coming Soon",
        },
    ),
    ("/profile", View::Profile),
];

fn table() -> RouteTable<View> {
    page_table().expect("page table must build")
}

// --- Application Table ---

#[test]
fn test_page_table_builds_with_expected_targets() {
    let table = table();

    assert_eq!(table.entries().len(), 11);
    assert_eq!(table.default_path(), "/dashboard");
    assert_eq!(table.login_path(), "/login");
    assert_eq!(DEFAULT_PATH, table.default_path());
    assert_eq!(LOGIN_PATH, table.login_path());
}

#[test]
fn test_public_paths_ignore_authentication() {
    let table = table();

    for (path, view) in PUBLIC_PAGES.iter() {
        for authenticated in [true, false] {
            assert_eq!(
                table.resolve(path, authenticated),
                Decision::RenderPublic(view),
                "{path} with authenticated={authenticated}"
            );
        }
    }
}

#[test]
fn test_protected_paths_are_gated() {
    let table = table();

    for (path, view) in PROTECTED_PAGES.iter() {
        assert_eq!(table.resolve(path, true), Decision::RenderProtected(view));
        assert_eq!(table.resolve(path, false), Decision::RedirectToLogin("/login"));
    }
}

#[test]
fn test_root_redirects_to_dashboard_regardless_of_auth() {
    let table = table();

    assert_eq!(table.resolve("/", true), Decision::RedirectToDefault("/dashboard"));
    assert_eq!(table.resolve("/", false), Decision::RedirectToDefault("/dashboard"));
}

#[test]
fn test_unknown_paths_redirect_to_dashboard() {
    let table = table();

    let unknown = [
        "/nonexistent-xyz",
        "",
        "dashboard",
        "//",
        "/dashboard/",
        "/Dashboard",
        "/login?next=/waste",
        "/inventory/42",
        "not a path at all",
        "/ünïcode",
    ];

    for path in unknown {
        for authenticated in [true, false] {
            let decision = table.resolve(path, authenticated);
            assert_eq!(
                decision,
                Decision::RedirectToDefault("/dashboard"),
                "{path:?} with authenticated={authenticated}"
            );
            assert_eq!(decision.redirect_target(), Some("/dashboard"));
            assert_eq!(decision.view(), None);
        }
    }
}

#[test]
fn test_repeated_resolution_yields_same_target() {
    let table = table();

    let first = table.resolve("/nonexistent-xyz", false);
    for _ in 0..5 {
        assert_eq!(table.resolve("/nonexistent-xyz", false), first);
    }
}

#[test]
fn test_decision_is_not_cached_across_auth_changes() {
    let table = table();

    assert_eq!(table.resolve("/inventory", false), Decision::RedirectToLogin("/login"));
    assert_eq!(
        table.resolve("/inventory", true),
        Decision::RenderProtected(&View::Inventory)
    );
    assert_eq!(table.resolve("/inventory", false), Decision::RedirectToLogin("/login"));
}

#[test]
fn test_unauthenticated_root_bounces_through_dashboard_to_login() {
    let table = table();

    let first = table.resolve("/", false);
    let second = table.resolve(first.redirect_target().unwrap(), false);
    let third = table.resolve(second.redirect_target().unwrap(), false);

    assert_eq!(first, Decision::RedirectToDefault("/dashboard"));
    assert_eq!(second, Decision::RedirectToLogin("/login"));
    assert_eq!(third, Decision::RenderPublic(&View::Login));
}

#[test]
fn test_placeholder_views_render_like_any_other_page() {
    let table = table();

    let decision = table.resolve("/requests", true);
    let view = decision.view().unwrap();
    assert_eq!(view.component(), "Placeholder");
    assert_eq!(view.message(), Some("Requests Page - Coming Soon"));
    assert_eq!(
        view.mount_markup(),
        r#"<div data-view="Placeholder">Requests Page - Coming Soon</div>"#
    );
}

// --- Table Construction ---

fn minimal() -> foodshare_portal::navigation::RouteTableBuilder<&'static str> {
    RouteTable::builder()
        .public("/login", "login")
        .protected("/home", "home")
        .default_path("/home")
        .login_path("/login")
}

#[test]
fn test_builder_accepts_minimal_table() {
    let table = minimal().build().unwrap();

    assert_eq!(table.resolve("/home", true), Decision::RenderProtected(&"home"));
    assert_eq!(table.resolve("/anything", true), Decision::RedirectToDefault("/home"));
}

#[test]
fn test_builder_rejects_duplicate_paths() {
    let result = minimal().public("/home", "other").build();
    assert_eq!(result.unwrap_err(), TableError::DuplicatePath("/home".to_string()));
}

#[test]
fn test_builder_rejects_root_entry() {
    let result = minimal().public("/", "root").build();
    assert_eq!(result.unwrap_err(), TableError::RootEntry);
}

#[test]
fn test_builder_rejects_relative_paths() {
    let result = minimal().protected("settings", "settings").build();
    assert_eq!(
        result.unwrap_err(),
        TableError::RelativePath("settings".to_string())
    );
}

#[test]
fn test_builder_rejects_unknown_default() {
    let result = minimal().default_path("/missing").build();
    assert_eq!(
        result.unwrap_err(),
        TableError::UnknownDefault("/missing".to_string())
    );
}

#[test]
fn test_builder_rejects_protected_login() {
    let result = minimal().login_path("/home").build();
    assert_eq!(
        result.unwrap_err(),
        TableError::LoginNotPublic("/home".to_string())
    );
}

#[test]
fn test_builder_requires_both_targets() {
    let no_default = RouteTable::builder()
        .public("/login", "login")
        .login_path("/login")
        .build();
    assert_eq!(no_default.unwrap_err(), TableError::MissingDefault);

    let no_login = RouteTable::builder()
        .public("/login", "login")
        .default_path("/login")
        .build();
    assert_eq!(no_login.unwrap_err(), TableError::MissingLogin);
}
