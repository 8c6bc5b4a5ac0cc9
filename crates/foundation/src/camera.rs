use crate::geo::LatLng;

/// Zoom level used when no persisted view-state exists.
pub const DEFAULT_ZOOM: u32 = 11;

/// The map camera: center coordinate plus integer zoom level.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraState {
    pub zoom: u32,
    pub center: LatLng,
}

impl CameraState {
    pub fn new(zoom: u32, center: LatLng) -> Self {
        CameraState { zoom, center }
    }
}
