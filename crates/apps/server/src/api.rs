//! HTTP handlers for the directory API.
//!
//! Three read-only endpoints back the map pages: the neighborhood query the
//! viewport sync cycle fetches from, the geocode relay behind address
//! search, and the full tag list for the project form.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::error;

use directory::ProjectSummary;
use foundation::Viewport;

use crate::seed::DirectoryStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) directory: Arc<RwLock<DirectoryStore>>,
    pub(crate) http: reqwest::Client,
    pub(crate) geocode: Arc<GeocodeConfig>,
}

#[derive(Debug, Clone)]
pub(crate) struct GeocodeConfig {
    pub(crate) upstream_url: String,
    /// Forwarded to the upstream geocoder when set.
    pub(crate) api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NeighborhoodQuery {
    north: f64,
    south: f64,
    east: f64,
    west: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct NeighborhoodResponse {
    projects: Vec<ProjectSummary>,
}

/// `GET /api/neighborhood` — projects with coordinates inside the viewport.
pub(crate) async fn neighborhood(
    State(state): State<AppState>,
    Query(query): Query<NeighborhoodQuery>,
) -> Json<NeighborhoodResponse> {
    let viewport = Viewport::new(query.north, query.south, query.east, query.west);
    let projects = state.directory.read().projects_in(viewport);
    Json(NeighborhoodResponse { projects })
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeQuery {
    address: String,
}

/// `GET /api/geocode` — relays the upstream geocoder's response verbatim.
///
/// No-match detection is the client's concern; only transport problems turn
/// into an error status here.
pub(crate) async fn geocode(
    State(state): State<AppState>,
    Query(query): Query<GeocodeQuery>,
) -> Response {
    let mut request = state
        .http
        .get(&state.geocode.upstream_url)
        .query(&[("address", query.address.as_str())]);
    if let Some(key) = &state.geocode.api_key {
        request = request.query(&[("key", key.as_str())]);
    }

    let upstream = match request.send().await {
        Ok(resp) => resp,
        Err(err) => {
            error!("geocode upstream unreachable: {err}");
            return (StatusCode::BAD_GATEWAY, "geocode upstream unreachable").into_response();
        }
    };

    match upstream.json::<serde_json::Value>().await {
        Ok(body) => Json(body).into_response(),
        Err(err) => {
            error!("geocode upstream returned invalid json: {err}");
            (
                StatusCode::BAD_GATEWAY,
                "geocode upstream returned invalid json",
            )
                .into_response()
        }
    }
}

/// `GET /api/tags` — every known tag name.
pub(crate) async fn tags(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.directory.read().tag_names())
}
