use anyhow::{Context, Result};
use std::time::Duration;

use tracing::{info, warn};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::{log_requests, state::*, ApiError, IndentedJson, ServerConfig};
use crate::album_store::Album;

pub const MESSAGE_ALBUM_NOT_FOUND: &str = "Album not found";
pub const MESSAGE_REPLACE_NOT_FOUND: &str = "Cannot replace album. ID not found";
pub const MESSAGE_DELETE_NOT_FOUND: &str = "Cannot delete album. Not found";

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub albums_count: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> Response {
    match state.album_store.albums_count() {
        Ok(albums_count) => IndentedJson(ServerStats {
            uptime: format_uptime(state.start_time.elapsed()),
            albums_count,
        })
        .into_response(),
        Err(err) => ApiError::from_store_error(err, MESSAGE_ALBUM_NOT_FOUND).into_response(),
    }
}

async fn get_albums(State(album_store): State<GuardedAlbumStore>) -> Response {
    match album_store.list_albums() {
        Ok(albums) => IndentedJson(albums).into_response(),
        Err(err) => ApiError::from_store_error(err, MESSAGE_ALBUM_NOT_FOUND).into_response(),
    }
}

async fn get_album_by_id(
    State(album_store): State<GuardedAlbumStore>,
    Path(id): Path<String>,
) -> Response {
    match album_store.get_album(&id) {
        Ok(album) => IndentedJson(album).into_response(),
        Err(err) => ApiError::from_store_error(err, MESSAGE_ALBUM_NOT_FOUND).into_response(),
    }
}

async fn post_album(
    State(album_store): State<GuardedAlbumStore>,
    body: Result<Json<Album>, JsonRejection>,
) -> Response {
    let Json(album) = match body {
        Ok(body) => body,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };

    match album_store.insert_album(album) {
        Ok(albums) => (StatusCode::CREATED, IndentedJson(albums)).into_response(),
        Err(err) => {
            warn!("Album rejected: {}", err);
            ApiError::from_store_error(err, MESSAGE_ALBUM_NOT_FOUND).into_response()
        }
    }
}

async fn replace_album_by_id(
    State(album_store): State<GuardedAlbumStore>,
    Path(id): Path<String>,
    body: Result<Json<Album>, JsonRejection>,
) -> Response {
    let Json(album) = match body {
        Ok(body) => body,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };

    match album_store.replace_album(&id, album) {
        Ok(albums) => IndentedJson(albums).into_response(),
        Err(err) => {
            warn!("Replacement of album {} rejected: {}", id, err);
            ApiError::from_store_error(err, MESSAGE_REPLACE_NOT_FOUND).into_response()
        }
    }
}

async fn delete_album_by_id(
    State(album_store): State<GuardedAlbumStore>,
    Path(id): Path<String>,
) -> Response {
    match album_store.delete_album(&id) {
        Ok(albums) => IndentedJson(albums).into_response(),
        Err(err) => ApiError::from_store_error(err, MESSAGE_DELETE_NOT_FOUND).into_response(),
    }
}

pub fn make_app(config: ServerConfig, album_store: GuardedAlbumStore) -> Router {
    let state = ServerState::new(config, album_store);

    let album_routes: Router = Router::new()
        .route("/", get(get_albums).post(post_album))
        .route(
            "/{id}",
            get(get_album_by_id)
                .put(replace_album_by_id)
                .delete(delete_album_by_id),
        )
        .with_state(state.clone());

    Router::new()
        .route("/", get(home))
        .with_state(state.clone())
        .nest("/albums", album_routes)
        .layer(middleware::from_fn_with_state(state, log_requests))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down..."),
        Err(err) => warn!("Could not listen for Ctrl-C: {}", err),
    }
}

pub async fn run_server(album_store: GuardedAlbumStore, config: ServerConfig) -> Result<()> {
    let bind_address = config.bind_address();
    let app = make_app(config, album_store);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Could not bind to {}", bind_address))?;

    info!("Ready to serve at {}!", bind_address);
    Ok(axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?)
}
