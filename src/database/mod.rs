use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::{info, warn};
use thiserror::Error;

use crate::model::Album;

pub mod search;
pub mod mutate;

pub use self::search::{SearchQuery, SongRef};
pub use self::mutate::{SongWrite, RatingUpdate};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("error reading dataset: {0}")]
    Io(#[from] io::Error),
    #[error("error parsing dataset: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures of catalog queries and mutations. Every variant is raised
/// before the catalog is touched.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("title or year search term is required")]
    MissingTitleOrYear,
    #[error("lyrics search term is required")]
    MissingLyrics,
    #[error("title and length are required")]
    MissingSongFields,
    #[error("title and rating are required")]
    MissingRatingFields,
    #[error("rating {0:?} is not a number")]
    InvalidRating(String),
    #[error("song {0:?} not found in any album")]
    SongNotFound(String),
    #[error("unorganized album not found in dataset")]
    MissingUnorganized,
}

/// The in-memory album dataset. Loaded once at startup; albums are never
/// added or removed afterwards, only their tracks change.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    albums: Vec<Album>,
}

impl Catalog {
    pub fn new(albums: Vec<Album>) -> Catalog {
        Catalog { albums: albums }
    }

    pub fn load(path: &Path) -> Result<Catalog, LoadError> {
        let file = File::open(path)?;
        let catalog = Catalog::from_reader(file)?;
        info!("loaded {} albums ({} tracks) from {}",
            catalog.albums.len(), catalog.track_count(), path.display());
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog, LoadError> {
        let albums: Vec<Album> = serde_json::from_reader(reader)?;
        if !albums.iter().any(Album::is_unorganized) {
            warn!("dataset has no unorganized album (ID 0); songs without an album will be rejected");
        }
        Ok(Catalog::new(albums))
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn track_count(&self) -> usize {
        self.albums.iter().map(|a| a.tracks.len()).sum()
    }
}

/// A search term as given by a client; missing or blank terms are absent.
fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
