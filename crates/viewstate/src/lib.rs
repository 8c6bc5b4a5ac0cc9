use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use foundation::{CameraState, LatLng};

const ZOOM_KEY: &str = "map-zoom";
const LAT_KEY: &str = "map-lat";
const LNG_KEY: &str = "map-lng";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStateError {
    StorageUnavailable,
    Io(String),
}

impl std::fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewStateError::StorageUnavailable => write!(f, "view-state storage unavailable"),
            ViewStateError::Io(msg) => write!(f, "view-state storage error: {msg}"),
        }
    }
}

impl std::error::Error for ViewStateError {}

/// Small persisted key-value store for per-page view state.
///
/// Browser local-storage semantics: per-origin, string-valued,
/// capacity-limited, possibly absent altogether. Writes are best-effort;
/// callers are expected to tolerate failure.
pub trait ViewStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, ViewStateError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ViewStateError>;
}

/// Last-known camera orientation, persisted across page loads.
///
/// Stored as three separate string keys so a partially written snapshot is
/// detectable: loading yields `None` unless every key is present and parses.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSnapshot {
    pub zoom: u32,
    pub lat: f64,
    pub lng: f64,
}

impl CameraSnapshot {
    pub fn of(camera: CameraState) -> Self {
        Self {
            zoom: camera.zoom,
            lat: camera.center.lat,
            lng: camera.center.lng,
        }
    }

    pub fn camera(&self) -> CameraState {
        CameraState::new(self.zoom, LatLng::new(self.lat, self.lng))
    }

    /// Returns `None` when any key is absent, unreadable, or holds a value
    /// that does not parse. Never an error: a bad snapshot is simply absent.
    pub fn load(store: &dyn ViewStateStore) -> Option<Self> {
        let zoom = read_value::<u32>(store, ZOOM_KEY)?;
        let lat = read_value::<f64>(store, LAT_KEY)?;
        let lng = read_value::<f64>(store, LNG_KEY)?;
        Some(CameraSnapshot { zoom, lat, lng })
    }

    pub fn save(&self, store: &mut dyn ViewStateStore) -> Result<(), ViewStateError> {
        store.set(ZOOM_KEY, &self.zoom.to_string())?;
        store.set(LAT_KEY, &self.lat.to_string())?;
        store.set(LNG_KEY, &self.lng.to_string())
    }
}

fn read_value<T: serde::de::DeserializeOwned>(store: &dyn ViewStateStore, key: &str) -> Option<T> {
    let raw = store.get(key).ok()??;
    serde_json::from_str(&raw).ok()
}

#[derive(Debug, Default)]
pub struct InMemoryViewStateStore {
    entries: BTreeMap<String, String>,
}

impl InMemoryViewStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewStateStore for InMemoryViewStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, ViewStateError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ViewStateError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_storage {
    use super::{ViewStateError, ViewStateStore};

    /// View-state store backed by the browser's `localStorage`.
    ///
    /// Keys are namespaced with a prefix so multiple maps on one origin do
    /// not clobber each other's snapshots.
    #[derive(Debug)]
    pub struct LocalStorageViewStateStore {
        key_prefix: String,
    }

    impl LocalStorageViewStateStore {
        pub fn new(key_prefix: impl Into<String>) -> Self {
            Self {
                key_prefix: key_prefix.into(),
            }
        }

        fn storage_key(&self, key: &str) -> String {
            if self.key_prefix.is_empty() {
                key.to_string()
            } else {
                format!("{}.{}", self.key_prefix, key)
            }
        }
    }

    impl ViewStateStore for LocalStorageViewStateStore {
        fn get(&self, key: &str) -> Result<Option<String>, ViewStateError> {
            let storage = window_local_storage()?;
            storage
                .get_item(&self.storage_key(key))
                .map_err(|e| ViewStateError::Io(format!("get_item failed: {:?}", e)))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), ViewStateError> {
            let storage = window_local_storage()?;
            storage
                .set_item(&self.storage_key(key), value)
                .map_err(|e| ViewStateError::Io(format!("set_item failed: {:?}", e)))
        }
    }

    fn window_local_storage() -> Result<web_sys::Storage, ViewStateError> {
        let win = web_sys::window().ok_or(ViewStateError::StorageUnavailable)?;
        win.local_storage()
            .map_err(|e| ViewStateError::Io(format!("localStorage error: {:?}", e)))?
            .ok_or(ViewStateError::StorageUnavailable)
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_storage::LocalStorageViewStateStore;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct LocalStorageViewStateStore;

#[cfg(not(target_arch = "wasm32"))]
impl LocalStorageViewStateStore {
    pub fn new(_key_prefix: impl Into<String>) -> Self {
        Self
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ViewStateStore for LocalStorageViewStateStore {
    fn get(&self, _key: &str) -> Result<Option<String>, ViewStateError> {
        Err(ViewStateError::StorageUnavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), ViewStateError> {
        Err(ViewStateError::StorageUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use foundation::{CameraState, LatLng};

    use super::{CameraSnapshot, InMemoryViewStateStore, ViewStateStore};

    #[test]
    fn snapshot_round_trips_through_store() {
        let mut store = InMemoryViewStateStore::new();
        let camera = CameraState::new(11, LatLng::new(49.28778937014537, -123.11413092334273));

        CameraSnapshot::of(camera).save(&mut store).unwrap();
        let loaded = CameraSnapshot::load(&store).expect("snapshot present");
        assert_eq!(loaded.camera(), camera);
    }

    #[test]
    fn empty_store_loads_as_absent() {
        let store = InMemoryViewStateStore::new();
        assert_eq!(CameraSnapshot::load(&store), None);
    }

    #[test]
    fn partial_snapshot_loads_as_absent() {
        let mut store = InMemoryViewStateStore::new();
        store.set("map-zoom", "11").unwrap();
        store.set("map-lat", "49.2").unwrap();
        assert_eq!(CameraSnapshot::load(&store), None);
    }

    #[test]
    fn corrupt_value_loads_as_absent() {
        let mut store = InMemoryViewStateStore::new();
        store.set("map-zoom", "eleven").unwrap();
        store.set("map-lat", "49.2").unwrap();
        store.set("map-lng", "-123.1").unwrap();
        assert_eq!(CameraSnapshot::load(&store), None);
    }

    #[test]
    fn local_storage_stub_reports_unavailable_off_wasm() {
        let store = super::LocalStorageViewStateStore::new("map");
        assert!(store.get("map-zoom").is_err());
    }
}
