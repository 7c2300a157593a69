use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Track {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Length", default)]
    pub length: String,
    #[serde(rename = "Lyrics", default)]
    pub lyrics: String,
    #[serde(rename = "Rating", default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Number>,
    #[serde(rename = "TrackArtist", default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
}

impl Track {
    pub fn new(name: &str, length: &str) -> Track {
        Track {
            name: name.to_owned(),
            length: length.to_owned(),
            ..Track::default()
        }
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Tracks without their own artist are credited to the album artist.
    pub fn has_own_artist(&self) -> bool {
        self.artist.as_ref().map_or(false, |a| !a.is_empty())
    }
}
