//! In-memory song store.
//!
//! Evaluates the same filters as [`MongoSongStore`](super::MongoSongStore)
//! over a `Vec<Song>`. Patterns are compiled with the `regex` crate, whose
//! syntax is close to, but not identical to, the PCRE dialect MongoDB uses.

use async_trait::async_trait;
use log::{debug, warn};
use mongodb::bson::oid::ObjectId;
use regex::{Regex, RegexBuilder};
use tokio::sync::RwLock;

use crate::constants::ERR_INVALID_PATTERN;
use crate::errors::SongError;
use crate::models::Song;
use crate::repositories::{SongFilter, SongStore, SongUpdate, TextPattern};

/// Song store holding its documents in process memory.
#[derive(Default)]
pub struct InMemorySongStore {
    songs: RwLock<Vec<Song>>,
}

impl InMemorySongStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `songs`, kept exactly as given.
    pub fn with_songs(songs: Vec<Song>) -> Self {
        Self {
            songs: RwLock::new(songs),
        }
    }

    /// Copy of every stored document, in insertion order.
    pub async fn snapshot(&self) -> Vec<Song> {
        self.songs.read().await.clone()
    }
}

/// A filter prepared for repeated evaluation.
enum Matcher {
    All,
    Id(i64),
    IdWithLikedState(i64),
    Liked(bool),
    Text(Regex),
}

impl Matcher {
    fn compile(filter: &SongFilter) -> Result<Self, SongError> {
        Ok(match filter {
            SongFilter::All => Matcher::All,
            SongFilter::ById(id) => Matcher::Id(*id),
            SongFilter::ByIdWithLikedState(id) => Matcher::IdWithLikedState(*id),
            SongFilter::ByLiked(liked) => Matcher::Liked(*liked),
            SongFilter::Text(text) => Matcher::Text(compile_pattern(text)?),
        })
    }

    fn matches(&self, song: &Song) -> bool {
        match self {
            Matcher::All => true,
            Matcher::Id(id) => song.id == *id,
            Matcher::IdWithLikedState(id) => song.id == *id && song.liked.is_some(),
            Matcher::Liked(liked) => song.liked == Some(*liked),
            Matcher::Text(regex) => {
                regex.is_match(&song.name)
                    || regex.is_match(&song.artist)
                    || regex.is_match(&song.genre)
            }
        }
    }
}

fn compile_pattern(text: &TextPattern) -> Result<Regex, SongError> {
    RegexBuilder::new(&text.pattern)
        .case_insensitive(!text.case_sensitive)
        .build()
        .map_err(|e| {
            warn!("{}: {}", ERR_INVALID_PATTERN, e);
            SongError::InvalidPattern(e.to_string())
        })
}

#[async_trait]
impl SongStore for InMemorySongStore {
    async fn find(&self, filter: &SongFilter) -> Result<Vec<Song>, SongError> {
        debug!("Memory store: Finding songs with filter: {:?}", filter);
        let matcher = Matcher::compile(filter)?;
        let songs = self.songs.read().await;
        Ok(songs.iter().filter(|s| matcher.matches(s)).cloned().collect())
    }

    async fn find_one(&self, filter: &SongFilter) -> Result<Option<Song>, SongError> {
        debug!("Memory store: Finding one song with filter: {:?}", filter);
        let matcher = Matcher::compile(filter)?;
        let songs = self.songs.read().await;
        Ok(songs.iter().find(|s| matcher.matches(s)).cloned())
    }

    async fn find_one_and_update(
        &self,
        filter: &SongFilter,
        update: &SongUpdate,
    ) -> Result<Option<Song>, SongError> {
        debug!("Memory store: Updating song {:?} with {:?}", filter, update);
        let matcher = Matcher::compile(filter)?;
        let mut songs = self.songs.write().await;
        Ok(songs.iter_mut().find(|s| matcher.matches(s)).map(|song| {
            match update {
                SongUpdate::ToggleLiked => {
                    if let Some(next) = song.like_state().toggled() {
                        song.liked = next.as_flag();
                    }
                }
            }
            song.clone()
        }))
    }

    async fn insert_many(&self, songs: Vec<Song>) -> Result<usize, SongError> {
        let inserted = songs.len();
        let mut stored = self.songs.write().await;
        stored.extend(songs.into_iter().map(|mut song| {
            song.object_id.get_or_insert_with(ObjectId::new);
            song
        }));
        debug!("Memory store: Inserted {} songs", inserted);
        Ok(inserted)
    }

    async fn count(&self, filter: &SongFilter) -> Result<u64, SongError> {
        let matcher = Matcher::compile(filter)?;
        let songs = self.songs.read().await;
        Ok(songs.iter().filter(|s| matcher.matches(s)).count() as u64)
    }
}
