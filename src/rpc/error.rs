use std::io::Cursor;

use log::error;
use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use serde::Serialize;
use thiserror::Error;

use crate::database::CatalogError;

/// Every failure a client can observe. Rendered as `{"message", "id"}` with
/// a matching status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("The page you are looking for was not found.")]
    NotFound,
    #[error("catalog lock poisoned")]
    Poisoned,
    #[error("error serializing response: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Failures raised by the framework itself, e.g. an oversize body.
    #[error("request failed with {0}")]
    Status(Status),
}

#[derive(Serialize, Debug, PartialEq)]
pub struct ErrorBody {
    pub message: String,
    pub id: &'static str,
}

impl ApiError {
    pub fn status(&self) -> Status {
        match *self {
            ApiError::Catalog(ref e) => match *e {
                CatalogError::MissingTitleOrYear |
                CatalogError::MissingLyrics |
                CatalogError::MissingSongFields |
                CatalogError::MissingRatingFields |
                CatalogError::InvalidRating(_) => Status::BadRequest,
                CatalogError::SongNotFound(_) => Status::NotFound,
                CatalogError::MissingUnorganized => Status::InternalServerError,
            },
            ApiError::NotFound => Status::NotFound,
            ApiError::Poisoned | ApiError::Serialize(_) => Status::InternalServerError,
            ApiError::Status(status) => status,
        }
    }

    pub fn body(&self) -> ErrorBody {
        let (message, id) = match *self {
            ApiError::Catalog(ref e) => match *e {
                CatalogError::MissingTitleOrYear =>
                    ("Title or year search term are required.".to_owned(), "MissingTitleOrYear"),
                CatalogError::MissingLyrics =>
                    ("Lyrics search term is required.".to_owned(), "MissingLyrics"),
                CatalogError::MissingSongFields =>
                    ("Title and length fields are required.".to_owned(), "MissingFields"),
                CatalogError::MissingRatingFields =>
                    ("Both title and rating are required.".to_owned(), "MissingFields"),
                CatalogError::InvalidRating(ref raw) =>
                    (format!("Rating \"{}\" is not a number.", raw), "InvalidRating"),
                CatalogError::SongNotFound(ref title) =>
                    (format!("Song \"{}\" not found in any album.", title), "SongNotFound"),
                CatalogError::MissingUnorganized =>
                    ("Unorganized album not found in dataset.".to_owned(), "InternalServerError"),
            },
            ApiError::NotFound => (self.to_string(), "notFound"),
            ApiError::Poisoned | ApiError::Serialize(_) =>
                ("Internal server error.".to_owned(), "InternalServerError"),
            ApiError::Status(status) => {
                let message = status.reason().unwrap_or("Request failed.").to_owned();
                (message, status_id(status))
            }
        };
        ErrorBody {
            message: message,
            id: id,
        }
    }
}

fn status_id(status: Status) -> &'static str {
    match status.code {
        400 => "BadRequest",
        404 => "notFound",
        413 => "PayloadTooLarge",
        422 => "UnprocessableEntity",
        500..=599 => "InternalServerError",
        _ => "RequestFailed",
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status.code >= 500 {
            error!("{}", self);
        }
        let body = serde_json::to_vec(&self.body())
            .map_err(|_| Status::InternalServerError)?;

        Response::build()
            .status(status)
            .header(ContentType::JSON)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use rocket::http::Status;

    use crate::database::CatalogError;
    use super::{ApiError, ErrorBody};

    #[test]
    fn catalog_errors_map_to_stable_ids() {
        let cases = vec![
            (CatalogError::MissingTitleOrYear, 400, "MissingTitleOrYear"),
            (CatalogError::MissingLyrics, 400, "MissingLyrics"),
            (CatalogError::MissingSongFields, 400, "MissingFields"),
            (CatalogError::MissingRatingFields, 400, "MissingFields"),
            (CatalogError::InvalidRating("x".into()), 400, "InvalidRating"),
            (CatalogError::SongNotFound("x".into()), 404, "SongNotFound"),
            (CatalogError::MissingUnorganized, 500, "InternalServerError"),
        ];
        for (err, code, id) in cases {
            let err = ApiError::from(err);
            assert_eq!(err.status().code, code);
            assert_eq!(err.body().id, id);
        }
    }

    #[test]
    fn song_not_found_names_the_song() {
        let err = ApiError::from(CatalogError::SongNotFound("Unknown Song".into()));
        assert_eq!(err.body(), ErrorBody {
            message: "Song \"Unknown Song\" not found in any album.".into(),
            id: "SongNotFound",
        });
    }

    #[test]
    fn framework_statuses_keep_their_code() {
        let err = ApiError::Status(Status::PayloadTooLarge);
        assert_eq!(err.status(), Status::PayloadTooLarge);
        assert_eq!(err.body().id, "PayloadTooLarge");
        assert_eq!(ApiError::NotFound.body().message, "The page you are looking for was not found.");
    }
}
