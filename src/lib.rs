//! Albums Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod album_store;
pub mod config;
pub mod server;

// Re-export commonly used types for convenience
pub use album_store::{Album, AlbumStore, AlbumStoreError, InMemoryAlbumStore, ReplaceValidation};
pub use server::{run_server, RequestsLoggingLevel};
