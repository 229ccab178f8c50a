use thiserror::Error;

/// The root path never renders a view; it always redirects to the default path.
pub const ROOT_PATH: &str = "/";

/// RouteEntry
///
/// One routing rule: an exact URL path, whether an authenticated session is
/// required before its view may render, and the view itself. The view is an
/// opaque reference owned by whoever builds the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<V> {
    pub path: String,
    pub requires_auth: bool,
    pub view: V,
}

/// Decision
///
/// The outcome of resolving one navigation request. Redirect variants carry
/// the target path; callers must perform a replace-navigation to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision<'a, V> {
    RenderPublic(&'a V),
    RenderProtected(&'a V),
    RedirectToLogin(&'a str),
    RedirectToDefault(&'a str),
}

impl<'a, V> Decision<'a, V> {
    /// The path the caller must replace-navigate to, if this is a redirect.
    pub fn redirect_target(&self) -> Option<&'a str> {
        match self {
            Decision::RedirectToLogin(to) | Decision::RedirectToDefault(to) => Some(*to),
            Decision::RenderPublic(_) | Decision::RenderProtected(_) => None,
        }
    }

    /// The view to render, if this decision renders one.
    pub fn view(&self) -> Option<&'a V> {
        match self {
            Decision::RenderPublic(view) | Decision::RenderProtected(view) => Some(*view),
            Decision::RedirectToLogin(_) | Decision::RedirectToDefault(_) => None,
        }
    }

    /// Short label used in structured logs.
    pub fn outcome(&self) -> &'static str {
        match self {
            Decision::RenderPublic(_) => "render_public",
            Decision::RenderProtected(_) => "render_protected",
            Decision::RedirectToLogin(_) => "redirect_to_login",
            Decision::RedirectToDefault(_) => "redirect_to_default",
        }
    }
}

/// TableError
///
/// Construction-time defects that would leave some request unresolvable or
/// ambiguous. These are programming bugs, surfaced once at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("route path `{0}` is not an absolute path")]
    RelativePath(String),
    #[error("route path `{0}` is registered more than once")]
    DuplicatePath(String),
    #[error("the root path is reserved for the default redirect")]
    RootEntry,
    #[error("default path is not set")]
    MissingDefault,
    #[error("default path `{0}` has no entry in the table")]
    UnknownDefault(String),
    #[error("login path is not set")]
    MissingLogin,
    #[error("login path `{0}` must be a public entry")]
    LoginNotPublic(String),
}

/// RouteTable
///
/// Ordered route entries plus the default and login targets. Built once at
/// startup and read-only afterwards, so it can be shared across tasks
/// behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
    default_path: String,
    login_path: String,
}

impl<V> RouteTable<V> {
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder::default()
    }

    /// resolve
    ///
    /// Decides what a navigation to `requested_path` does for a session whose
    /// authentication status is `is_authenticated`. Total and pure: every
    /// input yields exactly one decision and nothing is remembered between
    /// calls. Matching is an exact string comparison, first entry wins.
    pub fn resolve(&self, requested_path: &str, is_authenticated: bool) -> Decision<'_, V> {
        if requested_path == ROOT_PATH {
            return Decision::RedirectToDefault(&self.default_path);
        }

        match self.entries.iter().find(|entry| entry.path == requested_path) {
            Some(entry) if !entry.requires_auth => Decision::RenderPublic(&entry.view),
            Some(entry) if is_authenticated => Decision::RenderProtected(&entry.view),
            Some(_) => Decision::RedirectToLogin(&self.login_path),
            None => Decision::RedirectToDefault(&self.default_path),
        }
    }

    pub fn entries(&self) -> &[RouteEntry<V>] {
        &self.entries
    }

    pub fn default_path(&self) -> &str {
        &self.default_path
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }
}

/// RouteTableBuilder
///
/// Collects entries in declaration order and validates the whole table in
/// `build`.
#[derive(Debug)]
pub struct RouteTableBuilder<V> {
    entries: Vec<RouteEntry<V>>,
    default_path: Option<String>,
    login_path: Option<String>,
}

impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            default_path: None,
            login_path: None,
        }
    }
}

impl<V> RouteTableBuilder<V> {
    /// Registers a view that renders regardless of authentication.
    pub fn public(self, path: impl Into<String>, view: V) -> Self {
        self.entry(path, false, view)
    }

    /// Registers a view that requires an authenticated session.
    pub fn protected(self, path: impl Into<String>, view: V) -> Self {
        self.entry(path, true, view)
    }

    pub fn entry(mut self, path: impl Into<String>, requires_auth: bool, view: V) -> Self {
        self.entries.push(RouteEntry {
            path: path.into(),
            requires_auth,
            view,
        });
        self
    }

    /// Target for the root path and for every unknown path.
    pub fn default_path(mut self, path: impl Into<String>) -> Self {
        self.default_path = Some(path.into());
        self
    }

    /// Target for protected paths requested without a session.
    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = Some(path.into());
        self
    }

    pub fn build(self) -> Result<RouteTable<V>, TableError> {
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.path == ROOT_PATH {
                return Err(TableError::RootEntry);
            }
            if !entry.path.starts_with('/') {
                return Err(TableError::RelativePath(entry.path.clone()));
            }
            // Public and protected path sets must be disjoint, so any repeat is a defect.
            if self.entries[..index].iter().any(|seen| seen.path == entry.path) {
                return Err(TableError::DuplicatePath(entry.path.clone()));
            }
        }

        let default_path = self.default_path.ok_or(TableError::MissingDefault)?;
        if !self.entries.iter().any(|entry| entry.path == default_path) {
            return Err(TableError::UnknownDefault(default_path));
        }

        let login_path = self.login_path.ok_or(TableError::MissingLogin)?;
        if !self
            .entries
            .iter()
            .any(|entry| entry.path == login_path && !entry.requires_auth)
        {
            return Err(TableError::LoginNotPublic(login_path));
        }

        Ok(RouteTable {
            entries: self.entries,
            default_path,
            login_path,
        })
    }
}
