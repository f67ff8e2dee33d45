//! HTTP server exposing transfer links per block.
//!
//! `GET /block/:block_number` returns
//! `{"status": "success", "links": "<JSON encoded links>"}`, or
//! `{"detail": "<message>"}` with an error status.
use std::{io, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    cache::BlockStore,
    config::ServerConfig,
    fetch::{BlockFetcher, FetchError},
    types::encode_links,
};

/// Shared state for HTTP handlers
pub type SharedFetcher<S> = Arc<BlockFetcher<S>>;

/// Body of a successful block request.
#[derive(Debug, Deserialize, Serialize)]
pub struct LinksResponse {
    pub status: String,
    /// JSON array of single-entry `{from: to}` maps, encoded as a string.
    pub links: String,
}

/// Detail sent for cache failures, whose messages hold local paths.
pub const CACHE_FAILURE_DETAIL: &str = "Block cache unavailable";

/// Body of a failed request.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl FetchError {
    /// HTTP status reported for each kind of failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            FetchError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            FetchError::RemoteProvider(_) => StatusCode::BAD_REQUEST,
            FetchError::BlockNotFound(_) => StatusCode::NOT_FOUND,
            FetchError::Network(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FetchError::InvalidResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FetchError::Cache(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            warn!("Request failed: {self}");
        }
        let detail = match &self {
            FetchError::Cache(_) => CACHE_FAILURE_DETAIL.to_owned(),
            _ => self.to_string(),
        };
        let body = ErrorResponse { detail };
        (status, Json(body)).into_response()
    }
}

/// Create the HTTP router
pub fn create_router<S>(fetcher: SharedFetcher<S>) -> Router
where
    S: BlockStore + Send + Sync + 'static,
{
    // Any origin may read block links.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/block/:block_number", get(get_block_links::<S>))
        .layer(cors)
        .with_state(fetcher)
}

/// GET /block/:block_number
async fn get_block_links<S>(
    State(fetcher): State<SharedFetcher<S>>,
    Path(block_number): Path<String>,
) -> Result<Json<LinksResponse>, FetchError>
where
    S: BlockStore + Send + Sync + 'static,
{
    debug!("HTTP: links requested for block {block_number}");
    let links = fetcher.fetch_links(&block_number).await?;
    Ok(Json(LinksResponse {
        status: "success".to_owned(),
        links: encode_links(&links)?,
    }))
}

/// Binds the configured address and serves until the process ends.
pub async fn run_server<S>(fetcher: SharedFetcher<S>, config: &ServerConfig) -> io::Result<()>
where
    S: BlockStore + Send + Sync + 'static,
{
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    serve(fetcher, listener).await
}

/// Serves on an already bound listener.
pub async fn serve<S>(fetcher: SharedFetcher<S>, listener: TcpListener) -> io::Result<()>
where
    S: BlockStore + Send + Sync + 'static,
{
    info!("HTTP server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_router(fetcher)).await
}
