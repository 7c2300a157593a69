use std::env;
use std::path::PathBuf;
use std::process;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::error;
use rocket::http::Status;
use rocket::{catch, catchers, get, post, routes, Build, Request, Rocket, State};
use thiserror::Error;

mod asset;
mod config;
mod database;
mod model;
mod rpc;
mod web;

use self::config::{AppConfig, ConfigError, ImageConfig};
use self::database::{mutate, search};
use self::database::{Catalog, LoadError, SearchQuery, SongWrite};
use self::rpc::{
    AlbumObject,
    ApiError,
    RatingResponse,
    SongAddedResponse,
    SongObject,
};
use self::web::{FormBody, JsonResponse};

/// The catalog is shared by every request; writers hold the lock for the
/// whole read-modify-write.
type SharedCatalog = RwLock<Catalog>;

fn read(catalog: &SharedCatalog) -> Result<RwLockReadGuard<Catalog>, ApiError> {
    catalog.read().map_err(|_| ApiError::Poisoned)
}

fn write(catalog: &SharedCatalog) -> Result<RwLockWriteGuard<Catalog>, ApiError> {
    catalog.write().map_err(|_| ApiError::Poisoned)
}

#[get("/getAlbums")]
fn albums_get(catalog: &State<SharedCatalog>) -> Result<JsonResponse, ApiError> {
    let catalog = read(catalog)?;
    let albums: Vec<AlbumObject> = search::list_albums(&catalog)
        .into_iter()
        .map(AlbumObject::new)
        .collect();
    JsonResponse::ok(&albums)
}

#[get("/getSongs")]
fn songs_get(catalog: &State<SharedCatalog>) -> Result<JsonResponse, ApiError> {
    let catalog = read(catalog)?;
    let songs: Vec<SongObject> = search::list_songs(&catalog)
        .into_iter()
        .map(SongObject::new)
        .collect();
    JsonResponse::ok(&songs)
}

#[get("/albumSearch?<title>&<year>")]
fn album_search_get(catalog: &State<SharedCatalog>, title: Option<String>, year: Option<String>)
    -> Result<JsonResponse, ApiError>
{
    let query = SearchQuery::new(title.as_deref(), year.as_deref())?;
    let catalog = read(catalog)?;
    let albums: Vec<AlbumObject> = search::search_albums(&catalog, &query)
        .into_iter()
        .map(AlbumObject::new)
        .collect();
    JsonResponse::ok(&albums)
}

#[get("/songSearch?<title>&<year>")]
fn song_search_get(catalog: &State<SharedCatalog>, title: Option<String>, year: Option<String>)
    -> Result<JsonResponse, ApiError>
{
    let query = SearchQuery::new(title.as_deref(), year.as_deref())?;
    let catalog = read(catalog)?;
    let songs: Vec<SongObject> = search::search_songs(&catalog, &query)
        .into_iter()
        .map(SongObject::new)
        .collect();
    JsonResponse::ok(&songs)
}

#[get("/getSongFromLyrics?<lyrics>")]
fn lyrics_search_get(catalog: &State<SharedCatalog>, lyrics: Option<String>)
    -> Result<JsonResponse, ApiError>
{
    let catalog = read(catalog)?;
    let songs: Vec<SongObject> = search::search_lyrics(&catalog, lyrics.as_deref())?
        .into_iter()
        .map(SongObject::lyric_match)
        .collect();
    JsonResponse::ok(&songs)
}

#[post("/addSong", data = "<form>")]
fn add_song_post(catalog: &State<SharedCatalog>, form: FormBody) -> Result<JsonResponse, ApiError> {
    let mut catalog = write(catalog)?;
    match mutate::add_song(&mut catalog, form.get("title"), form.get("length"), form.get("album"))? {
        SongWrite::Added => JsonResponse::new(Status::Created, &SongAddedResponse::default()),
        SongWrite::Updated => Ok(JsonResponse::no_content()),
    }
}

#[post("/addRating", data = "<form>")]
fn add_rating_post(catalog: &State<SharedCatalog>, form: FormBody) -> Result<JsonResponse, ApiError> {
    let mut catalog = write(catalog)?;
    let update = mutate::add_rating(&mut catalog, form.get("title"), form.get("rating"))?;
    JsonResponse::ok(&RatingResponse::from(update))
}

#[catch(404)]
fn not_found() -> ApiError {
    ApiError::NotFound
}

#[catch(default)]
fn request_failed(status: Status, _req: &Request) -> ApiError {
    ApiError::Status(status)
}

fn mount(rocket: Rocket<Build>, catalog: Catalog, images: ImageConfig) -> Rocket<Build> {
    rocket
        .mount("/", routes![
            albums_get,
            songs_get,
            album_search_get,
            song_search_get,
            lyrics_search_get,
            add_song_post,
            add_rating_post,
        ])
        .mount("/", asset::routes())
        .register("/", catchers![
            not_found,
            request_failed,
        ])
        .manage(RwLock::new(catalog))
        .manage(images)
}

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("launch failed: {0}")]
    Launch(#[from] rocket::Error),
}

async fn run() -> Result<(), StartupError> {
    // building first installs Rocket's logger for the rest of startup
    let rocket = rocket::build();

    let config_file = env::args_os().nth(1).map(PathBuf::from);
    let mut app = AppConfig::load(config_file.as_deref())?;
    app.apply_env(|var| env::var(var).ok());

    let catalog = Catalog::load(&app.dataset.path)?;
    let rocket = mount(rocket.configure(app.web.figment()), catalog, app.images);
    rocket.launch().await?;
    Ok(())
}

#[rocket::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{}", e);
        process::exit(1);
    }
}
