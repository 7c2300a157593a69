use crate::model::Album;
use super::cover_reference;

/// Public album shape: every album field except the track list, with the
/// cover rewritten to a media reference.
#[derive(Debug, Clone, Copy)]
pub struct AlbumObject<'a> {
    pub wrapped: &'a Album,
}

impl<'a> AlbumObject<'a> {
    pub fn new(album: &'a Album) -> AlbumObject<'a> {
        AlbumObject { wrapped: album }
    }
}

impl<'a> serde::ser::Serialize for AlbumObject<'a>
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: serde::Serializer
    {
        use serde::ser::SerializeMap;

        let album = self.wrapped;
        let mut map = serializer.serialize_map(Some(12))?;
        map.serialize_entry("ID", &album.id.0)?;
        map.serialize_entry("AlbumTitle", &album.title)?;
        map.serialize_entry("AlbumArtist", &album.artist)?;
        map.serialize_entry("CoverImage", &cover_reference(&album.cover_image))?;
        map.serialize_entry("Released", &album.released)?;
        map.serialize_entry("Length", &album.length)?;
        map.serialize_entry("Label", &album.label)?;
        map.serialize_entry("Description", &album.description)?;
        map.serialize_entry("YoutubeURL", &album.youtube_url)?;
        map.serialize_entry("SpotifyURL", &album.spotify_url)?;
        map.serialize_entry("AppleURL", &album.apple_url)?;
        map.serialize_entry("WikiURL", &album.wiki_url)?;
        map.end()
    }
}
