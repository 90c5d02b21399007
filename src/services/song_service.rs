//! Song service for listing, lookup, like toggling and text search.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::constants::{ERR_LIKED_UNSET, ERR_SONG_NOT_FOUND};
use crate::errors::SongError;
use crate::models::{LikeState, Song};
use crate::repositories::{SongFilter, SongStore, SongUpdate, TextPattern};

pub struct SongService {
    store: Arc<dyn SongStore>,
}

impl SongService {
    pub fn new(store: Arc<dyn SongStore>) -> Self {
        Self { store }
    }

    /// Every song in the collection, in store order.
    pub async fn list_all(&self) -> Result<Vec<Song>, SongError> {
        self.store.find(&SongFilter::All).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Song>, SongError> {
        debug!("Fetching song by ID: {}", id);
        self.store.find_one(&SongFilter::ById(id)).await
    }

    /// Flip the liked flag of a song and return the new value.
    ///
    /// The flip is a single atomic update in the store, so concurrent toggles
    /// each apply in turn. A song without a liked state is left untouched.
    pub async fn toggle_liked(&self, id: i64) -> Result<bool, SongError> {
        let updated = self
            .store
            .find_one_and_update(&SongFilter::ByIdWithLikedState(id), &SongUpdate::ToggleLiked)
            .await?;

        let Some(song) = updated else {
            // Nothing toggled: tell a missing song from one without a liked state.
            return Err(match self.get_by_id(id).await? {
                None => {
                    warn!("Toggle failed: {} with id: {}", ERR_SONG_NOT_FOUND, id);
                    SongError::NotFound { id }
                }
                Some(_) => {
                    warn!("Toggle failed: {} with id: {}", ERR_LIKED_UNSET, id);
                    SongError::LikedUnset { id }
                }
            });
        };

        let state = song.like_state();
        info!("Song {} is now {}", id, state);
        match state {
            LikeState::Liked => Ok(true),
            LikeState::Disliked => Ok(false),
            LikeState::Unset => Err(SongError::LikedUnset { id }),
        }
    }

    /// Songs whose name, artist or genre matches `substring`.
    ///
    /// `substring` is used as a raw regular expression: metacharacters are not
    /// escaped, so unsanitized user input can change what matches. Use
    /// [`search_literal`](Self::search_literal) for untrusted text.
    /// `exact` selects case-sensitive matching.
    pub async fn search(&self, substring: &str, exact: bool) -> Result<Vec<Song>, SongError> {
        debug!("Searching songs: pattern={:?} exact={}", substring, exact);
        self.store
            .find(&SongFilter::Text(TextPattern::raw(substring, exact)))
            .await
    }

    /// Like [`search`](Self::search), with `substring` matched literally.
    pub async fn search_literal(
        &self,
        substring: &str,
        exact: bool,
    ) -> Result<Vec<Song>, SongError> {
        debug!("Searching songs literally: {:?} exact={}", substring, exact);
        self.store
            .find(&SongFilter::Text(TextPattern::literal(substring, exact)))
            .await
    }

    pub async fn count(&self) -> Result<u64, SongError> {
        self.store.count(&SongFilter::All).await
    }

    /// Number of songs currently marked as liked.
    pub async fn count_liked(&self) -> Result<u64, SongError> {
        self.store.count(&SongFilter::ByLiked(true)).await
    }
}
