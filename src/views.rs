/// View
///
/// Identifies the page component a route hands control to. The components
/// themselves live in the browser bundle and own their data fetching; this
/// crate only names them and marks where they mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Register,
    Dashboard,
    Donations,
    Products,
    Inventory,
    Donors,
    Waste,
    Profile,
    /// A page that is routed but not built yet. Renders its message and nothing else.
    Placeholder { message: &'static str },
}

impl View {
    /// Component name the browser bundle mounts for this view.
    pub fn component(&self) -> &'static str {
        match self {
            View::Login => "Login",
            View::Register => "Register",
            View::Dashboard => "Dashboard",
            View::Donations => "Donations",
            View::Products => "Products",
            View::Inventory => "Inventory",
            View::Donors => "Donors",
            View::Waste => "Waste",
            View::Profile => "Profile",
            View::Placeholder { .. } => "Placeholder",
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            View::Placeholder { message } => Some(*message),
            _ => None,
        }
    }

    /// Mount point markup for this view inside the HTML shell.
    pub fn mount_markup(&self) -> String {
        let body = self.message().map(escape_html).unwrap_or_default();
        format!(r#"<div data-view="{}">{}</div>"#, self.component(), body)
    }
}

/// Escapes the characters that matter inside HTML text and quoted attributes.
pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
