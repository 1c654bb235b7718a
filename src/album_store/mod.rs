mod models;
mod seed;
mod store;
mod trait_def;

pub use models::Album;
pub use seed::{default_albums, load_seed_file};
pub use store::InMemoryAlbumStore;
pub use trait_def::{AlbumStore, AlbumStoreError, ReplaceValidation};
