//! In-process directory contents served by the API.

use directory::{InMemoryLocator, ProjectSummary};
use foundation::Viewport;

#[derive(Debug, Default)]
pub(crate) struct DirectoryStore {
    locator: InMemoryLocator,
    tags: Vec<String>,
}

impl DirectoryStore {
    pub(crate) fn new(projects: Vec<ProjectSummary>, tags: Vec<String>) -> Self {
        Self {
            locator: InMemoryLocator::new(projects),
            tags,
        }
    }

    /// Viewport query, preserving insertion order for stable client labels.
    pub(crate) fn projects_in(&self, viewport: Viewport) -> Vec<ProjectSummary> {
        self.locator.in_viewport(viewport)
    }

    pub(crate) fn tag_names(&self) -> Vec<String> {
        self.tags.clone()
    }
}

/// Demo rows served until a real data source is wired in: three projects
/// around Vancouver with their owners' display names and tags.
pub(crate) fn demo_directory() -> DirectoryStore {
    let projects = vec![
        ProjectSummary {
            id: 1,
            name: "Stained Glass".to_string(),
            display_name: "pat".to_string(),
            lat: 49.28778937014537,
            lng: -123.11413092334273,
            tags: vec!["glass art".to_string()],
        },
        ProjectSummary {
            id: 2,
            name: "Compost Bin".to_string(),
            display_name: "jill".to_string(),
            lat: 49.191682433834714,
            lng: -122.84534638593648,
            tags: vec!["green living".to_string(), "hardware".to_string()],
        },
        ProjectSummary {
            id: 3,
            name: "Wooden Pallet useful for you?".to_string(),
            display_name: "tester".to_string(),
            lat: 49.176662,
            lng: -123.080341,
            tags: vec!["green living".to_string()],
        },
    ];
    let tags = vec![
        "glass art".to_string(),
        "green living".to_string(),
        "hardware".to_string(),
    ];
    DirectoryStore::new(projects, tags)
}

#[cfg(test)]
mod tests {
    use foundation::Viewport;

    use super::demo_directory;

    #[test]
    fn demo_directory_is_fully_seeded() {
        let store = demo_directory();
        assert_eq!(store.tag_names().len(), 3);

        let everywhere = Viewport::new(90.0, -90.0, 180.0, -180.0);
        assert_eq!(store.projects_in(everywhere).len(), 3);
    }

    #[test]
    fn neighborhood_query_filters_by_viewport() {
        let store = demo_directory();

        // Tight box around downtown Vancouver: only the first project.
        let downtown = Viewport::new(49.3, 49.28, -123.1, -123.12);
        let hits = store.projects_in(downtown);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Stained Glass");

        // Middle of the Pacific: nothing.
        let empty = Viewport::new(1.0, 0.0, -150.0, -151.0);
        assert!(store.projects_in(empty).is_empty());
    }
}
