//! In-memory album store guarded by a readers-writer lock.

use super::trait_def::{AlbumStore, AlbumStoreError, ReplaceValidation};
use super::{default_albums, Album};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Ordered album collection.
///
/// Reads share the lock; every mutation holds the write lock for the whole
/// scan-then-modify sequence, so duplicate checks cannot race each other.
#[derive(Debug)]
pub struct InMemoryAlbumStore {
    albums: RwLock<Vec<Album>>,
    replace_validation: ReplaceValidation,
}

impl InMemoryAlbumStore {
    /// Creates a store holding the built-in seed albums.
    pub fn new(replace_validation: ReplaceValidation) -> InMemoryAlbumStore {
        InMemoryAlbumStore {
            albums: RwLock::new(default_albums()),
            replace_validation,
        }
    }

    /// Creates a store from an arbitrary list, inserting the albums one by one
    /// so that the id and title invariants hold from the start.
    pub fn from_albums(
        albums: Vec<Album>,
        replace_validation: ReplaceValidation,
    ) -> Result<InMemoryAlbumStore, AlbumStoreError> {
        let store = InMemoryAlbumStore {
            albums: RwLock::new(Vec::with_capacity(albums.len())),
            replace_validation,
        };
        for album in albums {
            store.insert_album(album)?;
        }
        Ok(store)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Album>>, AlbumStoreError> {
        self.albums.read().map_err(|_| AlbumStoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Album>>, AlbumStoreError> {
        self.albums.write().map_err(|_| AlbumStoreError::LockPoisoned)
    }
}

fn position_of(albums: &[Album], id: &str) -> Option<usize> {
    albums.iter().position(|a| a.id == id)
}

impl AlbumStore for InMemoryAlbumStore {
    fn list_albums(&self) -> Result<Vec<Album>, AlbumStoreError> {
        Ok(self.read()?.clone())
    }

    fn get_album(&self, id: &str) -> Result<Album, AlbumStoreError> {
        self.read()?
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| AlbumStoreError::NotFound(id.to_owned()))
    }

    fn insert_album(&self, candidate: Album) -> Result<Vec<Album>, AlbumStoreError> {
        if candidate.id.is_empty() {
            return Err(AlbumStoreError::EmptyId);
        }

        let mut albums = self.write()?;
        // First conflict in scan order wins, id checked before title.
        for existing in albums.iter() {
            if existing.id == candidate.id {
                return Err(AlbumStoreError::DuplicateId(candidate.id));
            }
            if existing.title == candidate.title {
                return Err(AlbumStoreError::DuplicateTitle(candidate.title));
            }
        }

        debug!("Inserting album {} \"{}\"", candidate.id, candidate.title);
        albums.push(candidate);
        Ok(albums.clone())
    }

    fn replace_album(
        &self,
        id: &str,
        replacement: Album,
    ) -> Result<Vec<Album>, AlbumStoreError> {
        let mut albums = self.write()?;
        let index =
            position_of(&albums, id).ok_or_else(|| AlbumStoreError::NotFound(id.to_owned()))?;

        if self.replace_validation == ReplaceValidation::Strict {
            if replacement.id != id {
                return Err(AlbumStoreError::IdMismatch {
                    path_id: id.to_owned(),
                    replacement_id: replacement.id,
                });
            }
            let title_taken = albums
                .iter()
                .enumerate()
                .any(|(i, a)| i != index && a.title == replacement.title);
            if title_taken {
                return Err(AlbumStoreError::DuplicateTitle(replacement.title));
            }
        }

        debug!("Replacing album {} at position {}", id, index);
        albums[index] = replacement;
        Ok(albums.clone())
    }

    fn delete_album(&self, id: &str) -> Result<Vec<Album>, AlbumStoreError> {
        let mut albums = self.write()?;
        let index =
            position_of(&albums, id).ok_or_else(|| AlbumStoreError::NotFound(id.to_owned()))?;

        debug!("Deleting album {} at position {}", id, index);
        albums.remove(index);
        Ok(albums.clone())
    }

    fn albums_count(&self) -> Result<usize, AlbumStoreError> {
        Ok(self.read()?.len())
    }
}
