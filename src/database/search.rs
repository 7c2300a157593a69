//! Read-only filtering over the catalog. Results borrow from the catalog and
//! keep dataset order: albums in file order, tracks in album order.

use crate::model::{Album, Track};
use super::{present, Catalog, CatalogError};

/// A track together with the album it belongs to, which supplies the cover
/// and the fallback artist.
#[derive(Debug, Clone, Copy)]
pub struct SongRef<'a> {
    pub album: &'a Album,
    pub track: &'a Track,
}

/// Title/year filter shared by album and song search. At least one term
/// must be present; an absent term matches everything.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    title: Option<String>,
    year: Option<String>,
}

impl SearchQuery {
    pub fn new(title: Option<&str>, year: Option<&str>) -> Result<SearchQuery, CatalogError> {
        let title = present(title).map(str::to_lowercase);
        let year = present(year).map(str::to_owned);
        if title.is_none() && year.is_none() {
            return Err(CatalogError::MissingTitleOrYear);
        }
        Ok(SearchQuery {
            title: title,
            year: year,
        })
    }

    fn matches_year(&self, album: &Album) -> bool {
        match self.year {
            Some(ref year) => album.released.to_string().contains(year.as_str()),
            None => true,
        }
    }

    fn matches_title(&self, title: &str) -> bool {
        match self.title {
            Some(ref term) => title.to_lowercase().contains(term.as_str()),
            None => true,
        }
    }
}

pub fn list_albums(catalog: &Catalog) -> Vec<&Album> {
    catalog.albums().iter().collect()
}

pub fn list_songs(catalog: &Catalog) -> Vec<SongRef> {
    catalog.albums()
        .iter()
        .flat_map(|album| album.tracks.iter().map(move |track| SongRef { album: album, track: track }))
        .collect()
}

pub fn search_albums<'a>(catalog: &'a Catalog, query: &SearchQuery) -> Vec<&'a Album> {
    catalog.albums()
        .iter()
        .filter(|album| query.matches_title(&album.title) && query.matches_year(album))
        .collect()
}

/// The year term applies to the album, the title term to the track name.
/// Nameless tracks never match.
pub fn search_songs<'a>(catalog: &'a Catalog, query: &SearchQuery) -> Vec<SongRef<'a>> {
    let mut out = Vec::new();
    for album in catalog.albums().iter().filter(|a| query.matches_year(a)) {
        for track in album.tracks.iter() {
            if track.name.is_empty() || !query.matches_title(&track.name) {
                continue;
            }
            out.push(SongRef { album: album, track: track });
        }
    }
    out
}

pub fn search_lyrics<'a>(catalog: &'a Catalog, lyrics: Option<&str>)
    -> Result<Vec<SongRef<'a>>, CatalogError>
{
    let term = present(lyrics)
        .map(str::to_lowercase)
        .ok_or(CatalogError::MissingLyrics)?;

    let mut out = Vec::new();
    for album in catalog.albums().iter() {
        for track in album.tracks.iter() {
            if !track.lyrics.is_empty() && track.lyrics.to_lowercase().contains(&term) {
                out.push(SongRef { album: album, track: track });
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::fixtures;

    fn song_names(songs: &[SongRef]) -> Vec<String> {
        songs.iter().map(|s| s.track.name.clone()).collect()
    }

    #[test]
    fn query_requires_a_term() {
        assert_eq!(SearchQuery::new(None, None), Err(CatalogError::MissingTitleOrYear));
        assert_eq!(SearchQuery::new(Some(" "), Some("")), Err(CatalogError::MissingTitleOrYear));
        assert!(SearchQuery::new(Some("once"), None).is_ok());
        assert!(SearchQuery::new(None, Some("2017")).is_ok());
    }

    #[test]
    fn list_keeps_dataset_order() {
        let catalog = fixtures::catalog();
        let ids: Vec<i64> = list_albums(&catalog).iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);

        let songs = list_songs(&catalog);
        assert_eq!(songs.len(), 7);
        assert_eq!(songs[0].track.name, "Don't Be So Serious");
        assert_eq!(songs[3].album.title, "0");
    }

    #[test]
    fn album_title_is_case_insensitive() {
        let catalog = fixtures::catalog();
        let query = SearchQuery::new(Some("ONCE"), Some("")).unwrap();
        let found = search_albums(&catalog, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.0, 1);
    }

    #[test]
    fn album_filters_are_anded() {
        let catalog = fixtures::catalog();
        let query = SearchQuery::new(Some("once"), Some("2014")).unwrap();
        assert!(search_albums(&catalog, &query).is_empty());

        let query = SearchQuery::new(Some("o"), Some("201")).unwrap();
        let ids: Vec<i64> = search_albums(&catalog, &query).iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn year_matches_text_releases() {
        let catalog = fixtures::catalog();
        let query = SearchQuery::new(None, Some(" 2016 ")).unwrap();
        let found = search_albums(&catalog, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Live Sessions");
    }

    #[test]
    fn song_year_filters_by_album() {
        let catalog = fixtures::catalog();
        let query = SearchQuery::new(None, Some("2016")).unwrap();
        let songs = search_songs(&catalog, &query);
        assert_eq!(song_names(&songs), vec!["Half Asleep"]);
    }

    #[test]
    fn song_title_skips_nameless_tracks() {
        let catalog = fixtures::catalog();
        let query = SearchQuery::new(None, Some("2014")).unwrap();
        assert_eq!(song_names(&search_songs(&catalog, &query)), vec!["Breathe In", "Bones"]);

        let query = SearchQuery::new(Some("bONES"), None).unwrap();
        let songs = search_songs(&catalog, &query);
        assert_eq!(song_names(&songs), vec!["Bones", "Bones"]);
        assert_eq!(songs[0].album.id.0, 1);
        assert_eq!(songs[1].album.id.0, 2);
    }

    #[test]
    fn lyrics_are_case_insensitive() {
        let catalog = fixtures::catalog();
        let songs = search_lyrics(&catalog, Some("Alone ")).unwrap();
        assert_eq!(song_names(&songs), vec!["Don't Be So Serious", "Breathe In"]);
    }

    #[test]
    fn lyrics_require_a_term() {
        let catalog = fixtures::catalog();
        assert_eq!(search_lyrics(&catalog, None).unwrap_err(), CatalogError::MissingLyrics);
        assert_eq!(search_lyrics(&catalog, Some("")).unwrap_err(), CatalogError::MissingLyrics);
    }

    #[test]
    fn empty_lyrics_never_match() {
        let catalog = fixtures::catalog();
        // "e" appears in nearly every lyric; tracks without lyrics must still be absent
        let songs = search_lyrics(&catalog, Some("e")).unwrap();
        assert!(songs.iter().all(|s| !s.track.lyrics.is_empty()));
        assert!(!song_names(&songs).contains(&"Bones".to_string()));
    }
}
