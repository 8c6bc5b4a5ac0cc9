use directory::{EntityLocator, GeocodeError, Geocoder, LocatorError, ProjectSummary};
use foundation::{CameraState, LatLng, Viewport};
use viewstate::{CameraSnapshot, ViewStateStore};

use crate::listing::Listing;
use crate::surface::{CameraProvider, MarkerHandle, MarkerLabel, MarkerSurface};

/// Monotonic stamp distinguishing successive sync triggers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SyncGeneration(pub u64);

/// Work issued by [`ViewportSyncController::begin_sync`]: fetch entities for
/// `viewport`, then hand the outcome back to `apply_sync` with `generation`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SyncTicket {
    pub generation: SyncGeneration,
    pub viewport: Viewport,
}

/// What `apply_sync` did with a completed fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// Markers and listing now reflect this fetch.
    Applied { entities: usize },
    /// A newer trigger superseded this fetch; nothing changed.
    Stale,
    /// The fetch failed; the previous cycle's markers and listing remain.
    Failed(LocatorError),
}

/// Viewport-driven synchronization between a map surface and a results list.
///
/// The controller owns the rendered marker set and the listing; the camera
/// and the entity set are read through collaborator traits on every cycle.
/// Everything runs on the host page's single-threaded event loop, but rapid
/// camera events can overlap at the locator await point. Generation stamping
/// makes the most recently *triggered* fetch win regardless of completion
/// order; stale completions are discarded, never cancelled.
#[derive(Debug)]
pub struct ViewportSyncController {
    camera: CameraState,
    chosen_point: LatLng,
    issued: u64,
    applied: u64,
    current_marker: Option<MarkerHandle>,
    entity_markers: Vec<MarkerHandle>,
    entities: Vec<ProjectSummary>,
    listing: Listing,
}

impl ViewportSyncController {
    /// Restores the persisted camera, falling back to the page-supplied
    /// default when the store is empty, unavailable, or holds garbage.
    pub fn restore_camera(store: &dyn ViewStateStore, default: CameraState) -> CameraState {
        CameraSnapshot::load(store)
            .map(|snap| snap.camera())
            .unwrap_or(default)
    }

    /// Places the current-location marker at the camera center. No entities
    /// are fetched until the first camera-settled event arrives.
    pub fn new(initial: CameraState, markers: &mut impl MarkerSurface) -> Self {
        let mut controller = Self {
            camera: initial,
            chosen_point: initial.center,
            issued: 0,
            applied: 0,
            current_marker: None,
            entity_markers: Vec::new(),
            entities: Vec::new(),
            listing: Listing::NoResults,
        };
        controller.position_current_marker(initial.center, markers);
        controller
    }

    /// First half of a camera-settled cycle: snapshot the authoritative
    /// camera, persist it, and stamp the fetch about to be issued.
    ///
    /// Persistence is best-effort; a full or unavailable store never blocks
    /// the cycle.
    pub fn begin_sync(
        &mut self,
        camera: &impl CameraProvider,
        store: &mut dyn ViewStateStore,
    ) -> SyncTicket {
        let viewport = camera.viewport();
        self.camera = camera.camera();
        let _ = CameraSnapshot::of(self.camera).save(store);

        self.issued += 1;
        SyncTicket {
            generation: SyncGeneration(self.issued),
            viewport,
        }
    }

    /// Second half of a camera-settled cycle: reconcile markers and listing
    /// with a completed fetch.
    ///
    /// A generation older than the newest issued one is discarded. On
    /// success every previous entity marker is released before the new set
    /// renders, so the surface never accumulates orphans.
    pub fn apply_sync(
        &mut self,
        generation: SyncGeneration,
        fetched: Result<Vec<ProjectSummary>, LocatorError>,
        markers: &mut impl MarkerSurface,
    ) -> SyncOutcome {
        if generation.0 < self.issued {
            return SyncOutcome::Stale;
        }
        let results = match fetched {
            Ok(results) => results,
            Err(err) => return SyncOutcome::Failed(err),
        };

        for handle in self.entity_markers.drain(..) {
            markers.remove(handle);
        }
        for (i, entity) in results.iter().enumerate() {
            let handle = markers.place(entity.position(), MarkerLabel::Position(i + 1));
            self.entity_markers.push(handle);
        }

        self.listing = Listing::from_results(&results);
        self.entities = results;
        self.applied = generation.0;
        SyncOutcome::Applied {
            entities: self.entities.len(),
        }
    }

    /// Full camera-settled cycle for hosts that do not interleave triggers.
    ///
    /// Hosts that can re-enter while the locator call is in flight should
    /// run `begin_sync`/`apply_sync` around their own await instead.
    pub async fn sync_once(
        &mut self,
        camera: &impl CameraProvider,
        store: &mut dyn ViewStateStore,
        locator: &dyn EntityLocator,
        markers: &mut impl MarkerSurface,
    ) -> SyncOutcome {
        let ticket = self.begin_sync(camera, store);
        let fetched = locator.find_near(ticket.viewport).await;
        self.apply_sync(ticket.generation, fetched, markers)
    }

    /// Moves the current-location marker to a clicked coordinate and records
    /// it for form fields that mirror the chosen point. Never re-fetches.
    pub fn on_map_clicked(&mut self, at: LatLng, markers: &mut impl MarkerSurface) {
        self.chosen_point = at;
        self.position_current_marker(at, markers);
    }

    /// Resolves an address and recenters on the result.
    ///
    /// The camera widget's own settle event then re-enters the sync cycle;
    /// nothing is fetched here. When the geocoder reports no match, camera
    /// and markers stay exactly as they were.
    pub async fn on_search_submitted(
        &mut self,
        address: &str,
        geocoder: &dyn Geocoder,
        camera: &mut impl CameraProvider,
        markers: &mut impl MarkerSurface,
    ) -> Result<LatLng, GeocodeError> {
        let center = geocoder.resolve(address).await?;
        camera.recenter(center);
        self.chosen_point = center;
        self.position_current_marker(center, markers);
        Ok(center)
    }

    pub fn camera(&self) -> CameraState {
        self.camera
    }

    /// The last explicitly chosen point (by click or search).
    pub fn chosen_point(&self) -> LatLng {
        self.chosen_point
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn entities(&self) -> &[ProjectSummary] {
        &self.entities
    }

    pub fn current_marker(&self) -> Option<MarkerHandle> {
        self.current_marker
    }

    pub fn entity_markers(&self) -> &[MarkerHandle] {
        &self.entity_markers
    }

    pub fn issued_generation(&self) -> SyncGeneration {
        SyncGeneration(self.issued)
    }

    pub fn applied_generation(&self) -> SyncGeneration {
        SyncGeneration(self.applied)
    }

    // Removal is a no-op when the marker has not been placed yet.
    fn position_current_marker(&mut self, at: LatLng, markers: &mut impl MarkerSurface) {
        if let Some(handle) = self.current_marker.take() {
            markers.remove(handle);
        }
        self.current_marker = Some(markers.place(at, MarkerLabel::CurrentLocation));
    }
}
