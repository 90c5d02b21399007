//! Seed document layout.

use serde::Deserialize;

use crate::models::Song;

/// Top-level shape of the seed file: `{ "songs": [...] }`.
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    pub songs: Vec<Song>,
}
