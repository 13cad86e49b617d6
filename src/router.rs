//! Path-based routing between the login screen and the dashboard views.
//!
//! There are no guards: any dashboard path renders whether or not the user
//! has logged in.

use std::fmt;

/// A list view mounted inside the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Personal,
    Business,
    Links,
}

impl View {
    /// Sidebar order.
    pub const ALL: [View; 3] = [View::Personal, View::Business, View::Links];

    pub fn path(self) -> &'static str {
        match self {
            View::Personal => "/dashboard/personal",
            View::Business => "/dashboard/business",
            View::Links => "/dashboard/links",
        }
    }

    /// Label in the sidebar navigation.
    pub fn nav_label(self) -> &'static str {
        match self {
            View::Personal => "Personal Password Log",
            View::Business => "Business Password Log",
            View::Links => "Links Log",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Login,
    /// `/dashboard` with an optional child view. `None` renders an empty outlet.
    Dashboard(Option<View>),
}

impl Route {
    pub const DASHBOARD_PATH: &'static str = "/dashboard";

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Dashboard(None) => Self::DASHBOARD_PATH,
            Route::Dashboard(Some(view)) => view.path(),
        }
    }

    /// Matches a path. Unknown paths fall back to the login route.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        if normalized == Self::DASHBOARD_PATH {
            return Route::Dashboard(None);
        }
        View::ALL
            .into_iter()
            .find(|view| view.path() == normalized)
            .map_or(Route::Login, |view| Route::Dashboard(Some(view)))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Moves to `path` and returns the route it matched.
    pub fn navigate(&mut self, path: &str) -> Route {
        self.current = Route::parse(path);
        log::debug!("Navigated to {}", self.current);
        self.current
    }

    pub fn go(&mut self, route: Route) -> Route {
        self.navigate(route.path())
    }
}
