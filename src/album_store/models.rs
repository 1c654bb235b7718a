use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub year: i64,
}

impl Album {
    pub fn new(id: &str, title: &str, artist: &str, year: i64) -> Album {
        Album {
            id: id.to_owned(),
            title: title.to_owned(),
            artist: artist.to_owned(),
            year,
        }
    }
}
