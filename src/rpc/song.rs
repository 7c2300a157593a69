use crate::database::SongRef;
use super::cover_reference;

/// Public song shape. Listings and title/year searches carry the rating when
/// the track has one, and `Artist` (the album artist) only for tracks without
/// an artist of their own; lyric matches carry neither.
#[derive(Debug, Clone, Copy)]
pub struct SongObject<'a> {
    pub wrapped: SongRef<'a>,
    options: SongObjectOptions,
}

#[derive(Debug, Clone, Copy)]
struct SongObjectOptions
{
    include_rating: bool,
    include_artist: bool,
}

impl Default for SongObjectOptions
{
    fn default() -> SongObjectOptions {
        SongObjectOptions {
            include_rating: true,
            include_artist: true,
        }
    }
}

impl<'a> SongObject<'a> {
    pub fn new(song: SongRef<'a>) -> SongObject<'a> {
        SongObject {
            wrapped: song,
            options: SongObjectOptions::default(),
        }
    }

    pub fn lyric_match(song: SongRef<'a>) -> SongObject<'a> {
        SongObject {
            wrapped: song,
            options: SongObjectOptions {
                include_rating: false,
                include_artist: false,
            },
        }
    }
}

impl<'a> serde::ser::Serialize for SongObject<'a>
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: serde::Serializer
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        song_serialize_partial(&mut map, self.wrapped, self.options)?;
        map.end()
    }
}

fn song_serialize_partial<S>(mm: &mut S, song: SongRef, opts: SongObjectOptions)
    -> Result<(), S::Error>
    where S: serde::ser::SerializeMap
{
    let SongRef { album, track } = song;

    mm.serialize_entry("CoverImage", &cover_reference(&album.cover_image))?;
    mm.serialize_entry("SongName", &track.name)?;
    mm.serialize_entry("Length", &track.length)?;
    mm.serialize_entry("Lyrics", &track.lyrics)?;
    if opts.include_rating {
        if let Some(ref rating) = track.rating {
            mm.serialize_entry("Rating", rating)?;
        }
    }
    if opts.include_artist && !track.has_own_artist() {
        mm.serialize_entry("Artist", &album.artist)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::{self, json};

    use crate::database::{fixtures, Catalog};
    use crate::database::search::list_songs;
    use super::SongObject;

    #[test]
    fn rating_only_when_present() {
        let catalog = fixtures::catalog();
        let songs = list_songs(&catalog);

        let plain = serde_json::to_value(SongObject::new(songs[0])).unwrap();
        assert_eq!(plain, json!({
            "CoverImage": "/getImage?image=once.png",
            "SongName": "Don't Be So Serious",
            "Length": "4:37",
            "Lyrics": "I walk alone through the snow",
            "Artist": "Low Roar",
        }));

        let rated = serde_json::to_value(SongObject::new(songs[1])).unwrap();
        assert_eq!(rated["Rating"], json!(3));
    }

    #[test]
    fn own_track_artist_omits_artist() {
        let catalog = fixtures::catalog();
        let songs = list_songs(&catalog);
        let value = serde_json::to_value(SongObject::new(songs[2])).unwrap();
        assert_eq!(value["SongName"], json!("Poznan"));
        assert!(value.get("Artist").is_none());
    }

    #[test]
    fn empty_track_artist_falls_back() {
        let mut album = fixtures::catalog().albums()[1].clone();
        album.tracks[0].artist = Some(String::new());
        let catalog = Catalog::new(vec![album]);
        let songs = list_songs(&catalog);
        let value = serde_json::to_value(SongObject::new(songs[0])).unwrap();
        assert_eq!(value["Artist"], json!("Low Roar"));
    }

    #[test]
    fn lyric_match_is_minimal() {
        let catalog = fixtures::catalog();
        let songs = list_songs(&catalog);
        let value = serde_json::to_value(SongObject::lyric_match(songs[1])).unwrap();
        assert_eq!(value, json!({
            "CoverImage": "/getImage?image=once.png",
            "SongName": "Bones",
            "Length": "3:55",
            "Lyrics": "",
        }));
    }
}
