mod album;
mod track;

pub use self::album::{
    Album,
    Released,
};
pub use self::track::Track;
