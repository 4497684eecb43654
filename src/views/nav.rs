//! Navigation header

/// A routed screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Enroll,
    Programs,
    Clients,
    Dashboard,
}

impl Route {
    /// Routes in header order
    pub fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::Enroll,
            Route::Programs,
            Route::Clients,
            Route::Dashboard,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Enroll => "/enroll",
            Route::Programs => "/programs",
            Route::Clients => "/clients",
            Route::Dashboard => "/dashboard",
        }
    }

    /// Header link text
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Enroll => "Enroll",
            Route::Programs => "Programs",
            Route::Clients => "Clients",
            Route::Dashboard => "Dashboard",
        }
    }

    /// Resolve a location path; unknown paths have no route
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::all().iter().copied().find(|r| r.path() == normalized)
    }
}

/// Collapsible menu of the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link closes the menu
    pub fn choose(&mut self, route: Route) -> Route {
        self.open = false;
        route
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
