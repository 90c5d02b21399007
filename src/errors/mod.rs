use std::path::PathBuf;

use mongodb::error::ErrorKind;
use thiserror::Error;

use crate::constants::{
    CODE_INVALID_PATTERN, CODE_LIKED_UNSET, CODE_MALFORMED_DOCUMENT, CODE_SEED_IO_ERROR,
    CODE_SEED_PARSE_ERROR, CODE_SONG_NOT_FOUND, CODE_STORE_UNAVAILABLE, ERR_INVALID_PATTERN,
    ERR_LIKED_UNSET, ERR_MALFORMED_DOCUMENT, ERR_SEED_PARSE, ERR_SEED_READ, ERR_SONG_NOT_FOUND,
    ERR_STORE_UNAVAILABLE,
};

/// Failures surfaced by the song store, the accessor and the seed loader.
#[derive(Debug, Error)]
pub enum SongError {
    #[error("{} [id={id}]", ERR_SONG_NOT_FOUND)]
    NotFound { id: i64 },

    #[error("{} [id={id}]", ERR_LIKED_UNSET)]
    LikedUnset { id: i64 },

    #[error("{}: {0}", ERR_INVALID_PATTERN)]
    InvalidPattern(String),

    #[error("{} {}: {source}", ERR_SEED_READ, .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} {}: {source}", ERR_SEED_PARSE, .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A stored document does not have the shape of a song.
    #[error("{}: {0}", ERR_MALFORMED_DOCUMENT)]
    MalformedDocument(#[source] mongodb::error::Error),

    #[error("{}: {0}", ERR_STORE_UNAVAILABLE)]
    StoreUnavailable(#[source] mongodb::error::Error),
}

impl From<mongodb::error::Error> for SongError {
    fn from(err: mongodb::error::Error) -> Self {
        let malformed = matches!(*err.kind, ErrorKind::BsonDeserialization(_));
        if malformed {
            SongError::MalformedDocument(err)
        } else {
            SongError::StoreUnavailable(err)
        }
    }
}

impl SongError {
    /// Machine-readable code for the request layer.
    pub fn code(&self) -> &'static str {
        match self {
            SongError::NotFound { .. } => CODE_SONG_NOT_FOUND,
            SongError::LikedUnset { .. } => CODE_LIKED_UNSET,
            SongError::InvalidPattern(_) => CODE_INVALID_PATTERN,
            SongError::Io { .. } => CODE_SEED_IO_ERROR,
            SongError::Parse { .. } => CODE_SEED_PARSE_ERROR,
            SongError::MalformedDocument(_) => CODE_MALFORMED_DOCUMENT,
            SongError::StoreUnavailable(_) => CODE_STORE_UNAVAILABLE,
        }
    }
}
