use std::fs;
use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

use log::warn;
use rocket::figment::Figment;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error reading config {path}: {source}")]
    Io {
        path: PathBuf,
        source: io::Error,
    },
    #[error("error parsing config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub dataset: DatasetConfig,
    pub images: ImageConfig,
    pub web: WebConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> DatasetConfig {
        DatasetConfig {
            path: PathBuf::from("dataset/low-roar.json"),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ImageConfig {
    pub base: PathBuf,
    /// Served when a cover name is empty, as it is for the unorganized album.
    pub default_image: String,
}

impl Default for ImageConfig {
    fn default() -> ImageConfig {
        ImageConfig {
            base: PathBuf::from("client/images"),
            default_image: "low-roar.png".into(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WebConfig {
    pub address: IpAddr,
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> WebConfig {
        WebConfig {
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
        }
    }
}

impl WebConfig {
    /// Rocket settings for this listener, layered over Rocket's own defaults.
    pub fn figment(&self) -> Figment {
        rocket::Config::figment()
            .merge(("address", self.address))
            .merge(("port", self.port))
    }
}

impl AppConfig {
    pub fn parse(raw: &str) -> Result<AppConfig, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Reads `path`, or falls back to the built-in defaults when no config
    /// file was given.
    pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = match path {
            Some(path) => path,
            None => return Ok(AppConfig::default()),
        };
        let raw = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io { path: path.to_owned(), source: e })?;
        AppConfig::parse(&raw)
    }

    /// `PORT` wins over `NODE_PORT`; both win over the config file.
    pub fn apply_env<F>(&mut self, lookup: F)
        where F: Fn(&str) -> Option<String>
    {
        for var in ["PORT", "NODE_PORT"] {
            let raw = match lookup(var) {
                Some(raw) => raw,
                None => continue,
            };
            match raw.trim().parse() {
                Ok(port) => {
                    self.web.port = port;
                    return;
                }
                Err(_) => warn!("ignoring {}={:?}: not a port number", var, raw),
            }
        }
    }
}
