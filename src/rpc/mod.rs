use url::form_urlencoded;

mod album;
pub use self::album::AlbumObject;

mod song;
pub use self::song::SongObject;

mod message;
pub use self::message::{
    SongAddedResponse,
    RatingResponse,
};

mod error;
pub use self::error::ApiError;

/// Rewrites a dataset cover image into the media endpoint that serves it.
pub fn cover_reference(cover_image: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(cover_image.as_bytes()).collect();
    format!("/getImage?image={}", encoded)
}
