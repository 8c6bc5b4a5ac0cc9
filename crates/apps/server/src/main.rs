use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use parking_lot::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod seed;

use api::{AppState, GeocodeConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let addr: SocketAddr = env::var("DIRECTORY_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
        .parse()
        .expect("invalid DIRECTORY_ADDR");

    let geocode = GeocodeConfig {
        upstream_url: env::var("GEOCODE_UPSTREAM_URL")
            .unwrap_or_else(|_| "https://maps.googleapis.com/maps/api/geocode/json".to_string()),
        api_key: env::var("GEOCODE_API_KEY").ok(),
    };

    let state = AppState {
        directory: Arc::new(RwLock::new(seed::demo_directory())),
        http: reqwest::Client::new(),
        geocode: Arc::new(geocode),
    };

    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    let app = Router::new()
        .route("/api/neighborhood", get(api::neighborhood))
        .route("/api/geocode", get(api::geocode))
        .route("/api/tags", get(api::tags))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    info!("directory api listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("bind DIRECTORY_ADDR");
    axum::serve(listener, app).await.expect("server error");
}
