use std::collections::HashMap;
use std::io::{self, Cursor};

use rocket::data::{self, Data, FromData, Limits};
use rocket::http::{ContentType, Status};
use rocket::outcome::Outcome;
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use serde::Serialize;
use url::form_urlencoded;

use crate::rpc::ApiError;

/// A serialized JSON payload with its status. The body is sized so clients
/// get an exact `Content-Length`; 204 responses carry no body at all.
#[derive(Debug)]
pub struct JsonResponse {
    status: Status,
    body: Vec<u8>,
}

impl JsonResponse {
    pub fn new<T: Serialize + ?Sized>(status: Status, value: &T) -> Result<JsonResponse, ApiError> {
        let body = serde_json::to_vec(value)?;
        Ok(JsonResponse {
            status: status,
            body: body,
        })
    }

    pub fn ok<T: Serialize + ?Sized>(value: &T) -> Result<JsonResponse, ApiError> {
        JsonResponse::new(Status::Ok, value)
    }

    pub fn no_content() -> JsonResponse {
        JsonResponse {
            status: Status::NoContent,
            body: Vec::new(),
        }
    }
}

impl<'r> Responder<'r, 'static> for JsonResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let mut builder = Response::build();
        builder.status(self.status);
        builder.header(ContentType::JSON);
        if self.status != Status::NoContent {
            builder.sized_body(self.body.len(), Cursor::new(self.body));
        }
        builder.ok()
    }
}

/// A urlencoded request body. The body is decoded whatever content type the
/// client declared; repeated keys keep the last value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormBody {
    fields: HashMap<String, String>,
}

impl FormBody {
    pub fn parse(raw: &str) -> FormBody {
        FormBody {
            fields: form_urlencoded::parse(raw.as_bytes()).into_owned().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

#[rocket::async_trait]
impl<'r> FromData<'r> for FormBody {
    type Error = io::Error;

    async fn from_data(req: &'r Request<'_>, data: Data<'r>) -> data::Outcome<'r, Self> {
        let limit = req.limits().get("form").unwrap_or(Limits::FORM);
        let body = match data.open(limit).into_string().await {
            Ok(body) => body,
            Err(e) => return Outcome::Error((Status::BadRequest, e)),
        };
        if !body.is_complete() {
            let err = io::Error::new(io::ErrorKind::Other, format!("form body exceeds {}", limit));
            return Outcome::Error((Status::PayloadTooLarge, err));
        }
        Outcome::Success(FormBody::parse(&body.into_inner()))
    }
}
