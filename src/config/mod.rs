use std::env;
use std::path::PathBuf;

use lazy_static::lazy_static;

use crate::constants::{DEFAULT_COLLECTION_SONGS, DEFAULT_SEED_PATH};

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub database_name: String,
    pub songs_collection: String,
    pub seed_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "song_library".to_string()),
            songs_collection: env::var("DB_COLLECTION_SONGS")
                .unwrap_or_else(|_| DEFAULT_COLLECTION_SONGS.to_string()),
            seed_path: env::var("SONGS_SEED_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SEED_PATH)),
        }
    }
}
