//! Where the user currently is

use super::routes::Route;

/// Something that can move the user to another page
pub trait Navigator {
    fn navigate(&mut self, route: Route);

    fn current(&self) -> &Route;
}

/// In-memory navigation history, starting on the landing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<Route>,
}

impl History {
    pub fn new() -> Self {
        Self::starting_at(Route::Home)
    }

    pub fn starting_at(route: Route) -> Self {
        Self {
            entries: vec![route],
        }
    }

    /// Go back one page. The first entry is never popped.
    pub fn back(&mut self) -> Option<&Route> {
        if self.entries.len() > 1 {
            self.entries.pop();
            self.entries.last()
        } else {
            None
        }
    }

    pub fn entries(&self) -> &[Route] {
        &self.entries
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for History {
    fn navigate(&mut self, route: Route) {
        if self.entries.last() != Some(&route) {
            tracing::debug!(to = %route, "navigate");
            self.entries.push(route);
        }
    }

    fn current(&self) -> &Route {
        // entries always holds the starting route
        &self.entries[self.entries.len() - 1]
    }
}
