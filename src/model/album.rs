use serde::{Deserialize, Serialize};
use std::fmt;

use super::track::Track;

/// Album id 0 is the bucket for songs submitted without an album.
pub const UNORGANIZED_ALBUM_ID: AlbumId = AlbumId(0);

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub struct AlbumId(pub i64);

/// Release year as stored in the dataset: usually a number, occasionally
/// free text like "2014 (reissue)".
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(untagged)]
pub enum Released {
    Year(i64),
    Text(String),
}

impl Default for Released {
    fn default() -> Released {
        Released::Text(String::new())
    }
}

impl fmt::Display for Released {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Released::Year(year) => write!(f, "{}", year),
            Released::Text(ref text) => f.write_str(text),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Album {
    #[serde(rename = "ID")]
    pub id: AlbumId,
    #[serde(rename = "AlbumTitle", default)]
    pub title: String,
    #[serde(rename = "AlbumArtist", default)]
    pub artist: String,
    #[serde(rename = "CoverImage", default)]
    pub cover_image: String,
    #[serde(rename = "Released", default)]
    pub released: Released,
    #[serde(rename = "Length", default)]
    pub length: String,
    #[serde(rename = "Label", default)]
    pub label: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "YoutubeURL", default)]
    pub youtube_url: String,
    #[serde(rename = "SpotifyURL", default)]
    pub spotify_url: String,
    #[serde(rename = "AppleURL", default)]
    pub apple_url: String,
    #[serde(rename = "WikiURL", default)]
    pub wiki_url: String,
    #[serde(rename = "Tracks", default)]
    pub tracks: Vec<Track>,
}

impl Album {
    pub fn is_unorganized(&self) -> bool {
        self.id == UNORGANIZED_ALBUM_ID
    }

    /// Case-insensitive lookup of a track by exact name.
    pub fn find_track_mut(&mut self, name: &str) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.has_name(name))
    }
}
