use std::future::Future;
use std::pin::Pin;

use foundation::Viewport;

use crate::model::ProjectSummary;

/// Boxed future so async collaborators stay dyn-compatible.
///
/// Collaborators are awaited on the host page's single-threaded event loop,
/// so no `Send` bound is required.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocatorError {
    /// The locator service could not be reached.
    Transport(String),
    /// The locator service answered, but not with a usable result.
    Service(String),
}

impl std::fmt::Display for LocatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocatorError::Transport(msg) => write!(f, "locator unreachable: {msg}"),
            LocatorError::Service(msg) => write!(f, "locator error: {msg}"),
        }
    }
}

impl std::error::Error for LocatorError {}

/// Looks up directory entries with coordinates inside a viewport.
pub trait EntityLocator {
    fn find_near(&self, viewport: Viewport)
    -> BoxFuture<'_, Result<Vec<ProjectSummary>, LocatorError>>;
}

/// Locator over an owned project list.
///
/// Matches preserve insertion order, the same order the backing query
/// reports, so marker labels and listing positions are stable.
#[derive(Debug, Default)]
pub struct InMemoryLocator {
    projects: Vec<ProjectSummary>,
}

impl InMemoryLocator {
    pub fn new(projects: Vec<ProjectSummary>) -> Self {
        Self { projects }
    }

    pub fn projects(&self) -> &[ProjectSummary] {
        &self.projects
    }

    /// Strict-bounds viewport filter; boundary points are excluded.
    pub fn in_viewport(&self, viewport: Viewport) -> Vec<ProjectSummary> {
        self.projects
            .iter()
            .filter(|p| viewport.contains(p.position()))
            .cloned()
            .collect()
    }
}

impl EntityLocator for InMemoryLocator {
    fn find_near(
        &self,
        viewport: Viewport,
    ) -> BoxFuture<'_, Result<Vec<ProjectSummary>, LocatorError>> {
        Box::pin(std::future::ready(Ok(self.in_viewport(viewport))))
    }
}

#[cfg(test)]
mod tests {
    use foundation::Viewport;

    use super::{EntityLocator, InMemoryLocator};
    use crate::model::ProjectSummary;

    fn project(id: u64, name: &str, lat: f64, lng: f64) -> ProjectSummary {
        ProjectSummary {
            id,
            name: name.to_string(),
            display_name: name.to_lowercase(),
            lat,
            lng,
            tags: Vec::new(),
        }
    }

    #[test]
    fn find_near_keeps_insertion_order() {
        let locator = InMemoryLocator::new(vec![
            project(2, "Second", 40.75, -73.95),
            project(1, "First", 40.76, -73.96),
            project(3, "Elsewhere", 10.0, 10.0),
        ]);
        let viewport = Viewport::new(40.8, 40.7, -73.9, -74.0);

        let hits = pollster::block_on(locator.find_near(viewport)).unwrap();
        let ids: Vec<u64> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn boundary_points_are_excluded() {
        let locator = InMemoryLocator::new(vec![project(1, "Edge", 40.8, -73.95)]);
        let viewport = Viewport::new(40.8, 40.7, -73.9, -74.0);
        assert!(locator.in_viewport(viewport).is_empty());
    }
}
