use serde::{Deserialize, Serialize};

use foundation::LatLng;

/// One directory entry: a project, its owner's display name, its location,
/// and its tag names in display order.
///
/// Immutable once fetched; each sync cycle replaces the whole set rather
/// than merging against the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: u64,
    pub name: String,
    pub display_name: String,
    pub lat: f64,
    /// The directory API spells longitude `long` on the wire.
    #[serde(rename = "long")]
    pub lng: f64,
    pub tags: Vec<String>,
}

impl ProjectSummary {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}
