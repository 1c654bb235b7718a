use axum::extract::FromRef;

use crate::album_store::AlbumStore;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedAlbumStore = Arc<dyn AlbumStore>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub album_store: GuardedAlbumStore,
}

impl ServerState {
    pub fn new(config: ServerConfig, album_store: GuardedAlbumStore) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            album_store,
        }
    }
}

impl FromRef<ServerState> for GuardedAlbumStore {
    fn from_ref(input: &ServerState) -> Self {
        input.album_store.clone()
    }
}
