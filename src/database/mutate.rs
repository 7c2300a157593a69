//! Track writes. Each operation validates its input and resolves its target
//! before modifying anything, so an error always leaves the catalog as it
//! was.

use log::{error, info};
use serde_json::Number;

use crate::model::{Album, Track};
use super::{present, Catalog, CatalogError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongWrite {
    /// A new track was appended to the album.
    Added,
    /// An existing track had its length replaced and its lyrics cleared.
    Updated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingUpdate {
    /// Name of the rated track as stored, not as requested.
    pub title: String,
    pub rating: Number,
}

/// Adds `title` to the album named `album`, or to the unorganized album when
/// no album is given or none matches.
///
/// Re-adding a track that already exists replaces its length and wipes its
/// lyrics.
pub fn add_song(catalog: &mut Catalog, title: Option<&str>, length: Option<&str>, album: Option<&str>)
    -> Result<SongWrite, CatalogError>
{
    let (title, length) = match (present(title), present(length)) {
        (Some(title), Some(length)) => (title, length),
        _ => return Err(CatalogError::MissingSongFields),
    };

    let target = target_album(catalog, present(album))?;
    let album_title = target.title.clone();
    match target.find_track_mut(title) {
        Some(track) => {
            info!("updating song {:?} in album {:?}", track.name, album_title);
            track.length = length.to_owned();
            track.lyrics.clear();
            Ok(SongWrite::Updated)
        }
        None => {
            info!("adding song {:?} to album {:?}", title, album_title);
            target.tracks.push(Track::new(title, length));
            Ok(SongWrite::Added)
        }
    }
}

fn target_album<'a>(catalog: &'a mut Catalog, name: Option<&str>)
    -> Result<&'a mut Album, CatalogError>
{
    let albums = &catalog.albums;
    let index = name
        .and_then(|name| {
            let name = name.to_lowercase();
            albums.iter().position(|a| a.title.to_lowercase() == name)
        })
        .or_else(|| albums.iter().position(Album::is_unorganized));

    match index {
        Some(index) => Ok(&mut catalog.albums[index]),
        None => {
            error!("unorganized album not found in dataset");
            Err(CatalogError::MissingUnorganized)
        }
    }
}

/// Sets the rating on the first track named `title`, searching albums in
/// dataset order. Tracks sharing a name in later albums are left alone.
pub fn add_rating(catalog: &mut Catalog, title: Option<&str>, rating: Option<&str>)
    -> Result<RatingUpdate, CatalogError>
{
    let (title, rating) = match (present(title), present(rating)) {
        (Some(title), Some(rating)) => (title, rating),
        _ => return Err(CatalogError::MissingRatingFields),
    };
    let rating: Number = rating.parse()
        .map_err(|_| CatalogError::InvalidRating(rating.to_owned()))?;

    let track = catalog.albums
        .iter_mut()
        .flat_map(|album| album.tracks.iter_mut())
        .find(|track| track.has_name(title))
        .ok_or_else(|| CatalogError::SongNotFound(title.to_owned()))?;

    info!("rating {:?} as {}", track.name, rating);
    track.rating = Some(rating.clone());
    Ok(RatingUpdate {
        title: track.name.clone(),
        rating: rating,
    })
}
