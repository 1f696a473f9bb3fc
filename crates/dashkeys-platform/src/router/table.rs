use std::collections::HashMap;

use dashkeys_common::PlatformError;
use regex::Regex;

/// Pattern that matches any path. Routes added later go ahead of it.
pub const CATCH_ALL: &str = "(.*)";

/// The dashboard's route table, in match order.
const DASHBOARD_ROUTES: &[(&str, &str)] = &[
    ("/", "showcase-view"),
    ("/todos", "todos-view"),
    ("/todos/:variant", "todos-view"),
    ("/analytics", "analytics-view"),
    ("/widgets", "widgets-view"),
    ("/profile", "profile-view"),
    ("/settings", "settings-view"),
    (CATCH_ALL, "not-found-view"),
];

/// A path pattern mapped to the view that renders it.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    pub view: String,
    regex: Regex,
}

impl Route {
    pub fn new(path: &str, view: &str) -> Result<Self, PlatformError> {
        Ok(Self {
            path: path.to_string(),
            view: view.to_string(),
            regex: compile_pattern(path)?,
        })
    }

    pub fn is_catch_all(&self) -> bool {
        self.path == CATCH_ALL
    }

    fn matches(&self, path: &str) -> Option<RouteMatch> {
        let caps = self.regex.captures(path)?;
        let params = self
            .regex
            .capture_names()
            .flatten()
            .filter_map(|name| caps.name(name).map(|m| (name.to_string(), m.as_str().to_string())))
            .collect();
        Some(RouteMatch {
            route: self.path.clone(),
            view: self.view.clone(),
            path: path.to_string(),
            params,
        })
    }
}

/// Result of resolving a location against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Pattern of the route that matched.
    pub route: String,
    pub view: String,
    /// The resolved pathname, without query or fragment.
    pub path: String,
    pub params: HashMap<String, String>,
}

/// Ordered route table. The first matching route wins.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// An empty table; nothing resolves.
    pub fn new() -> Self {
        Self::default()
    }

    /// The dashboard's routes, ending with the not-found catch-all.
    pub fn dashboard() -> Result<Self, PlatformError> {
        let routes = DASHBOARD_ROUTES
            .iter()
            .map(|(path, view)| Route::new(path, view))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { routes })
    }

    pub fn resolve(&self, location: &str) -> Option<RouteMatch> {
        let path = strip_query(location);
        self.routes.iter().find_map(|route| route.matches(path))
    }

    /// Add a route ahead of the catch-all, or replace the view of an
    /// existing pattern in place.
    pub fn add_route(&mut self, path: &str, view: &str) -> Result<(), PlatformError> {
        let route = Route::new(path, view)?;

        if let Some(existing) = self.routes.iter_mut().find(|r| r.path == path) {
            tracing::debug!(path, view, "route replaced");
            *existing = route;
            return Ok(());
        }

        let pos = self
            .routes
            .iter()
            .position(Route::is_catch_all)
            .unwrap_or(self.routes.len());
        self.routes.insert(pos, route);
        tracing::debug!(path, view, "route added");
        Ok(())
    }

    /// Remove every route with this exact pattern. Returns whether any was
    /// removed.
    pub fn remove_route(&mut self, path: &str) -> bool {
        let before = self.routes.len();
        self.routes.retain(|r| r.path != path);
        before != self.routes.len()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

fn strip_query(location: &str) -> &str {
    location
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or(location)
}

/// Compile a route pattern into an anchored regex.
///
/// `:name` captures one path segment; a parenthesized group is passed
/// through as a raw regex; everything else matches literally.
fn compile_pattern(pattern: &str) -> Result<Regex, PlatformError> {
    let mut re = String::from("^");
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ':' => {
                let mut name = String::new();
                while let Some(&n) = chars.peek() {
                    if n.is_ascii_alphanumeric() || n == '_' {
                        name.push(n);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if name.is_empty() {
                    return Err(PlatformError::InvalidRoute(format!(
                        "{pattern}: parameter without a name"
                    )));
                }
                re.push_str(&format!("(?P<{name}>[^/]+)"));
            }
            '(' => {
                let mut depth = 1;
                re.push('(');
                for n in chars.by_ref() {
                    re.push(n);
                    match n {
                        '(' => depth += 1,
                        ')' => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                        }
                        _ => {}
                    }
                }
                if depth != 0 {
                    return Err(PlatformError::InvalidRoute(format!(
                        "{pattern}: unbalanced parenthesis"
                    )));
                }
            }
            other => {
                let mut buf = [0u8; 4];
                re.push_str(&regex::escape(other.encode_utf8(&mut buf)));
            }
        }
    }
    re.push('$');

    Regex::new(&re).map_err(|e| PlatformError::InvalidRoute(format!("{pattern}: {e}")))
}
