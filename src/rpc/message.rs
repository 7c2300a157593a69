use serde::Serialize;
use serde_json::Number;

use crate::database::RatingUpdate;

#[derive(Serialize, Debug)]
pub struct SongAddedResponse {
    pub message: &'static str,
    pub id: &'static str,
}

impl Default for SongAddedResponse {
    fn default() -> SongAddedResponse {
        SongAddedResponse {
            message: "Song added successfully.",
            id: "SongAdded",
        }
    }
}

#[derive(Serialize, Debug)]
pub struct RatingResponse {
    pub message: String,
    pub song: RatedSong,
}

#[derive(Serialize, Debug)]
pub struct RatedSong {
    pub title: String,
    pub rating: Number,
}

impl From<RatingUpdate> for RatingResponse {
    fn from(update: RatingUpdate) -> RatingResponse {
        RatingResponse {
            message: format!("Rating for \"{}\" updated successfully.", update.title),
            song: RatedSong {
                title: update.title,
                rating: update.rating,
            },
        }
    }
}
