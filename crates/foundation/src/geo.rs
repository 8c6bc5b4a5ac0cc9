/// Geographic coordinate in WGS84 degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

/// Rectangular lat/lng bounds currently visible on a map surface.
///
/// Invariant: `north >= south`. East/west may wrap at the antimeridian;
/// wrapped viewports get no special handling.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Viewport {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Viewport {
            north,
            south,
            east,
            west,
        }
    }

    /// Strict containment on all four edges: a point sitting exactly on a
    /// boundary is outside the viewport.
    pub fn contains(&self, p: LatLng) -> bool {
        p.lat < self.north && p.lat > self.south && p.lng > self.west && p.lng < self.east
    }
}
