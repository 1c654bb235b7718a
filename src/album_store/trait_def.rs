//! AlbumStore trait definition.
//!
//! The server only talks to the collection through this trait, so handlers
//! never see how albums are stored or guarded.

use super::Album;
use clap::ValueEnum;
use thiserror::Error;

/// Errors returned by album store operations.
///
/// A failing operation leaves the collection untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlbumStoreError {
    #[error("No album with id '{0}'")]
    NotFound(String),

    #[error("An album with id '{0}' already exists")]
    DuplicateId(String),

    #[error("An album titled '{0}' already exists")]
    DuplicateTitle(String),

    #[error("Album id must not be empty")]
    EmptyId,

    #[error("Replacement id '{replacement_id}' does not match path id '{path_id}'")]
    IdMismatch {
        path_id: String,
        replacement_id: String,
    },

    #[error("Album store lock poisoned")]
    LockPoisoned,
}

/// How much checking `replace_album` does on the replacement record.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, ValueEnum)]
pub enum ReplaceValidation {
    /// Swap the record in place without looking at its id or title.
    #[default]
    Legacy,
    /// Require the replacement id to match the path id and its title to be
    /// unique among the other albums.
    Strict,
}

impl std::fmt::Display for ReplaceValidation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => write!(f, "{:?}", self),
        }
    }
}

/// Trait for album storage backends.
///
/// Operations returning `Vec<Album>` return the full collection as it is
/// right after the operation, in listing order.
pub trait AlbumStore: Send + Sync {
    /// Returns all albums in insertion order.
    fn list_albums(&self) -> Result<Vec<Album>, AlbumStoreError>;

    /// Returns the album with the given id.
    fn get_album(&self, id: &str) -> Result<Album, AlbumStoreError>;

    /// Appends a new album, rejecting duplicate ids and titles.
    fn insert_album(&self, candidate: Album) -> Result<Vec<Album>, AlbumStoreError>;

    /// Replaces the album with the given id, keeping its position.
    fn replace_album(&self, id: &str, replacement: Album)
        -> Result<Vec<Album>, AlbumStoreError>;

    /// Removes the album with the given id.
    fn delete_album(&self, id: &str) -> Result<Vec<Album>, AlbumStoreError>;

    /// Number of albums currently stored.
    fn albums_count(&self) -> Result<usize, AlbumStoreError>;
}
