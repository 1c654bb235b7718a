use super::Album;
use anyhow::{Context, Result};
use std::path::Path;

/// The albums every store starts with unless a seed file is given.
pub fn default_albums() -> Vec<Album> {
    vec![
        Album::new("1", "El Madrileño", "C Tangana", 2021),
        Album::new("2", "Hybrid Theory", "Linkin Park", 2002),
        Album::new("3", "Ser Humano", "Tiro de Gracia", 1997),
        Album::new("4", "Un Verano sin Ti", "Bad Bunny", 2022),
        Album::new("5", "Master of Puppets", "Metallica", 1986),
        Album::new("6", "And Justice For All", "Metallica", 1988),
        Album::new("7", "Un Día en Suburbia", "Nach Scratch", 2008),
        Album::new("8", "Swimming", "Mac Miller", 2008),
        Album::new("9", "Mr Morale & The Big Steppers", "Kendrick Lamar", 2022),
        Album::new("10", "Muerte", "Canserbero", 2012),
    ]
}

/// Reads a JSON array of albums.
///
/// Only the shape is checked here, uniqueness is enforced when the albums
/// are inserted into a store.
pub fn load_seed_file(path: &Path) -> Result<Vec<Album>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse seed file: {:?}", path))
}
