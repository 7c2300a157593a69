//! Album cover images. Covers live as flat files in the configured image
//! directory; the unorganized album has no cover and gets the default one.

use std::path::PathBuf;

use log::warn;
use rocket::fs::NamedFile;
use rocket::http::ContentType;
use rocket::{get, routes, Route, State};

use crate::config::ImageConfig;
use crate::rpc::ApiError;

pub fn routes() -> Vec<Route> {
    routes![
        image_get,
    ]
}

/// Resolves a client-supplied cover name inside the image directory.
/// Anything that could step outside it is refused.
fn image_path(config: &ImageConfig, name: Option<&str>) -> Option<PathBuf> {
    let name = match name.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => config.default_image.as_str(),
    };
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return None;
    }
    Some(config.base.join(name))
}

#[get("/getImage?<image>")]
async fn image_get(config: &State<ImageConfig>, image: Option<String>)
    -> Result<(ContentType, NamedFile), ApiError>
{
    let path = image_path(config, image.as_deref()).ok_or(ApiError::NotFound)?;
    match NamedFile::open(&path).await {
        Ok(file) => Ok((ContentType::PNG, file)),
        Err(e) => {
            warn!("error opening image {}: {}", path.display(), e);
            Err(ApiError::NotFound)
        }
    }
}
