//! Song store backed by a MongoDB collection.
//!
//! The collection handle is shared with the rest of the process; this store
//! never opens or closes the underlying client.
//!
//! A document that cannot be decoded as a [`Song`] (for example one missing
//! `name`) fails with [`SongError::MalformedDocument`]; every other driver
//! failure surfaces as [`SongError::StoreUnavailable`].

use async_trait::async_trait;
use futures::TryStreamExt;
use log::debug;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::errors::SongError;
use crate::models::Song;
use crate::repositories::{SongFilter, SongStore, SongUpdate};

/// Store for song documents in MongoDB.
#[derive(Clone)]
pub struct MongoSongStore {
    collection: Collection<Song>,
}

impl MongoSongStore {
    /// Create a store over `collection_name` in `db`.
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection(collection_name),
        }
    }
}

#[async_trait]
impl SongStore for MongoSongStore {
    async fn find(&self, filter: &SongFilter) -> Result<Vec<Song>, SongError> {
        let filter = filter.to_document();
        debug!("Repository: Finding songs with filter: {:?}", filter);
        let cursor = self.collection.find(filter).await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_one(&self, filter: &SongFilter) -> Result<Option<Song>, SongError> {
        let filter = filter.to_document();
        debug!("Repository: Finding one song with filter: {:?}", filter);
        Ok(self.collection.find_one(filter).await?)
    }

    async fn find_one_and_update(
        &self,
        filter: &SongFilter,
        update: &SongUpdate,
    ) -> Result<Option<Song>, SongError> {
        let filter = filter.to_document();
        let update = update.to_modifications();
        debug!("Repository: Updating song {:?} with {:?}", filter, update);
        Ok(self
            .collection
            .find_one_and_update(filter, update)
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn insert_many(&self, songs: Vec<Song>) -> Result<usize, SongError> {
        // The driver rejects an empty batch.
        if songs.is_empty() {
            return Ok(0);
        }
        debug!("Repository: Inserting {} songs", songs.len());
        let result = self.collection.insert_many(songs).await?;
        Ok(result.inserted_ids.len())
    }

    async fn count(&self, filter: &SongFilter) -> Result<u64, SongError> {
        Ok(self.collection.count_documents(filter.to_document()).await?)
    }
}
