//! The URL route table.
//!
//! An ordered list of `(prefix, target)` entries, built once at startup and
//! shared read-only by every worker. The first entry whose prefix matches an
//! incoming path wins.

use crate::errors::RouteError;

pub const ADMIN_PREFIX: &str = "admin/";
pub const PING_PREFIX: &str = "api/ping/";

/// Where a matched request is handed off to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// The admin subsystem. Owns every path below its prefix.
    Admin,
    /// The liveness view. Answers its prefix and nothing below it.
    Ping,
}

impl RouteTarget {
    pub fn name(self) -> &'static str {
        match self {
            RouteTarget::Admin => "admin",
            RouteTarget::Ping => "ping",
        }
    }

    fn is_include(self) -> bool {
        matches!(self, RouteTarget::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    prefix: String,
    target: RouteTarget,
}

impl Route {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn target(&self) -> RouteTarget {
        self.target
    }

    /// Path the route is mounted at in the HTTP server, e.g. `/admin`.
    pub fn mount_path(&self) -> String {
        format!("/{}", self.prefix.trim_end_matches('/'))
    }

    /// Path of the single resource an exact route serves, e.g. `/api/ping/`.
    pub fn resource_path(&self) -> String {
        format!("/{}", self.prefix)
    }

    fn matches<'p>(&self, path: &'p str) -> Option<&'p str> {
        let rest = path.strip_prefix(self.prefix.as_str())?;
        if self.target.is_include() || rest.is_empty() {
            Some(rest)
        } else {
            None
        }
    }
}

/// Result of a successful dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatch<'t, 'p> {
    pub route: &'t Route,
    /// What is left of the path after the route's prefix.
    pub remainder: &'p str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        RouteTable { routes: Vec::new() }
    }

    /// The application's URL patterns.
    pub fn url_patterns() -> Result<Self, RouteError> {
        let mut table = RouteTable::new();
        table.register(ADMIN_PREFIX, RouteTarget::Admin)?;
        table.register(PING_PREFIX, RouteTarget::Ping)?;
        Ok(table)
    }

    /// Appends a route. Prefixes are stored without a leading slash and must be unique.
    pub fn register(&mut self, prefix: &str, target: RouteTarget) -> Result<(), RouteError> {
        let prefix = prefix.trim_start_matches('/');

        if self.routes.iter().any(|r| r.prefix == prefix) {
            return Err(RouteError::DuplicatePrefix(prefix.to_string()));
        }

        tracing::debug!("Registered route '{}' -> {}", prefix, target.name());
        self.routes.push(Route {
            prefix: prefix.to_string(),
            target,
        });
        Ok(())
    }

    /// Selects the first route matching `path`. Leading slashes are ignored;
    /// the path is otherwise compared literally.
    pub fn dispatch<'t, 'p>(&'t self, path: &'p str) -> Option<RouteMatch<'t, 'p>> {
        let path = path.trim_start_matches('/');

        self.routes.iter().find_map(|route| {
            route.matches(path).map(|remainder| RouteMatch { route, remainder })
        })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
