use directory::ProjectSummary;

/// Row text shown when the viewport holds no projects.
pub const NO_RESULTS_TEXT: &str = "No projects near by..";

/// One row of the results table, mirroring one rendered marker.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRow {
    /// 1-based position; equals the marker label.
    pub position: usize,
    /// Entity id the row's name links to.
    pub id: u64,
    pub name: String,
    pub tags: Vec<String>,
    pub display_name: String,
}

impl ListingRow {
    /// Tags joined for display, e.g. `green, public`.
    pub fn tag_line(&self) -> String {
        self.tags.join(", ")
    }
}

/// List view contents for one sync cycle, replaced wholesale each cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    /// Rendered as the single `NO_RESULTS_TEXT` row.
    NoResults,
    Rows(Vec<ListingRow>),
}

impl Listing {
    pub fn from_results(results: &[ProjectSummary]) -> Self {
        if results.is_empty() {
            return Listing::NoResults;
        }
        Listing::Rows(
            results
                .iter()
                .enumerate()
                .map(|(i, p)| ListingRow {
                    position: i + 1,
                    id: p.id,
                    name: p.name.clone(),
                    tags: p.tags.clone(),
                    display_name: p.display_name.clone(),
                })
                .collect(),
        )
    }

    pub fn rows(&self) -> &[ListingRow] {
        match self {
            Listing::Rows(rows) => rows,
            Listing::NoResults => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use directory::ProjectSummary;

    use super::Listing;

    fn project(id: u64, name: &str) -> ProjectSummary {
        ProjectSummary {
            id,
            name: name.to_string(),
            display_name: format!("{name} owner"),
            lat: 0.0,
            lng: 0.0,
            tags: vec!["green".to_string(), "public".to_string()],
        }
    }

    #[test]
    fn empty_results_render_the_notice() {
        assert_eq!(Listing::from_results(&[]), Listing::NoResults);
    }

    #[test]
    fn rows_are_positioned_in_result_order() {
        let listing = Listing::from_results(&[project(7, "B"), project(3, "A")]);
        let rows = listing.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].position, rows[0].id), (1, 7));
        assert_eq!((rows[1].position, rows[1].id), (2, 3));
        assert_eq!(rows[0].tag_line(), "green, public");
    }
}
