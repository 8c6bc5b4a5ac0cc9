use foundation::{CameraState, LatLng, Viewport};

/// Opaque handle to a rendered marker, issued by the marker surface.
///
/// Small and copyable so controller state never borrows the widget.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerHandle(pub u64);

/// Label painted on a marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MarkerLabel {
    /// 1-based position of an entity within the current result set.
    Position(usize),
    /// The single marker for the last explicitly chosen point.
    CurrentLocation,
}

impl MarkerLabel {
    pub fn text(&self) -> String {
        match self {
            MarkerLabel::Position(n) => n.to_string(),
            MarkerLabel::CurrentLocation => "*".to_string(),
        }
    }
}

/// Map widget surface that can place and remove point markers.
///
/// A removed handle is dead; the controller never holds one past the
/// `remove` call.
pub trait MarkerSurface {
    fn place(&mut self, at: LatLng, label: MarkerLabel) -> MarkerHandle;
    fn remove(&mut self, handle: MarkerHandle);
}

/// Authoritative source for the map's current viewport and camera.
pub trait CameraProvider {
    fn viewport(&self) -> Viewport;
    fn camera(&self) -> CameraState;
    /// Recenters the map. The widget emits its own settle event afterwards,
    /// which re-enters the sync cycle.
    fn recenter(&mut self, center: LatLng);
}

#[cfg(test)]
mod tests {
    use super::MarkerLabel;

    #[test]
    fn labels_render_position_and_star() {
        assert_eq!(MarkerLabel::Position(1).text(), "1");
        assert_eq!(MarkerLabel::Position(12).text(), "12");
        assert_eq!(MarkerLabel::CurrentLocation.text(), "*");
    }
}
