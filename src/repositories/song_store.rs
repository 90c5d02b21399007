use async_trait::async_trait;

use crate::errors::SongError;
use crate::models::Song;
use crate::repositories::{SongFilter, SongUpdate};

/// Query and update primitives over the songs collection.
#[async_trait]
pub trait SongStore: Send + Sync {
    /// All songs matching the filter, in store order.
    async fn find(&self, filter: &SongFilter) -> Result<Vec<Song>, SongError>;

    /// The first song matching the filter.
    async fn find_one(&self, filter: &SongFilter) -> Result<Option<Song>, SongError>;

    /// Atomically apply `update` to the first matching song and return the
    /// document as it is after the update, or `None` when nothing matched.
    async fn find_one_and_update(
        &self,
        filter: &SongFilter,
        update: &SongUpdate,
    ) -> Result<Option<Song>, SongError>;

    /// Insert every song. Returns how many were inserted.
    async fn insert_many(&self, songs: Vec<Song>) -> Result<usize, SongError>;

    async fn count(&self, filter: &SongFilter) -> Result<u64, SongError>;
}
