//! Seed loader for the initial population of the songs collection.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};

use crate::config::CONFIG;
use crate::constants::{ERR_SEED_PARSE, ERR_SEED_READ, MSG_SEED_SKIPPED};
use crate::errors::SongError;
use crate::models::{SeedFile, Song};
use crate::repositories::{SongFilter, SongStore};

/// Loads the static seed document into a song store.
pub struct SeedLoader {
    store: Arc<dyn SongStore>,
    seed_path: PathBuf,
}

impl SeedLoader {
    /// Create a SeedLoader reading the seed path from config.
    pub fn new(store: Arc<dyn SongStore>) -> Self {
        Self::with_seed_path(store, CONFIG.seed_path.clone())
    }

    /// Create a SeedLoader with a custom seed path.
    pub fn with_seed_path(store: Arc<dyn SongStore>, seed_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            seed_path: seed_path.into(),
        }
    }

    pub fn seed_path(&self) -> &Path {
        &self.seed_path
    }

    /// Insert every song from the seed file and return how many were inserted.
    ///
    /// Existing documents are not checked, so running this twice duplicates
    /// every song.
    pub async fn populate(&self) -> Result<usize, SongError> {
        let songs = read_seed(&self.seed_path).await?;
        let inserted = self.store.insert_many(songs).await?;
        info!(
            "Seeded {} songs from {}",
            inserted,
            self.seed_path.display()
        );
        Ok(inserted)
    }

    /// Populate only when the collection holds no songs.
    pub async fn populate_if_empty(&self) -> Result<usize, SongError> {
        let existing = self.store.count(&SongFilter::All).await?;
        if existing > 0 {
            info!("{} ({} songs)", MSG_SEED_SKIPPED, existing);
            return Ok(0);
        }
        self.populate().await
    }
}

/// Read and parse a seed document.
pub async fn read_seed(path: &Path) -> Result<Vec<Song>, SongError> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        warn!("{} {}: {}", ERR_SEED_READ, path.display(), e);
        SongError::Io {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    let seed: SeedFile = serde_json::from_str(&content).map_err(|e| {
        warn!("{} {}: {}", ERR_SEED_PARSE, path.display(), e);
        SongError::Parse {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    Ok(seed.songs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemorySongStore;
    use crate::services::SongService;
    use uuid::Uuid;

    struct TempSeed(PathBuf);

    impl TempSeed {
        fn write(content: &str) -> Self {
            let path = std::env::temp_dir().join(format!("songs_seed_{}.json", Uuid::new_v4()));
            std::fs::write(&path, content).unwrap();
            Self(path)
        }
    }

    impl Drop for TempSeed {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    const SINGLE_SONG: &str =
        r#"{"songs":[{"id":1,"name":"A","artist":"X","genre":"Pop","liked":false}]}"#;

    #[tokio::test]
    async fn test_populate_then_toggle_scenario() {
        let seed = TempSeed::write(SINGLE_SONG);
        let store = Arc::new(InMemorySongStore::new());
        let loader = SeedLoader::with_seed_path(store.clone(), &seed.0);
        let service = SongService::new(store.clone());

        assert_eq!(loader.populate().await.unwrap(), 1);

        let song = service.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(song.name, "A");
        assert_eq!(song.artist, "X");
        assert_eq!(song.genre, "Pop");
        assert_eq!(song.liked, Some(false));

        assert!(service.toggle_liked(1).await.unwrap());
        let song = service.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(song.liked, Some(true));
    }

    #[tokio::test]
    async fn test_populate_inserts_exactly_the_seed() {
        let seed = TempSeed::write(
            r#"{"songs":[
                {"id":3,"name":"C","artist":"Z","genre":"Jazz","liked":true},
                {"id":1,"name":"A","artist":"X","genre":"Pop","liked":false},
                {"id":2,"name":"B","artist":"Y","genre":"Rock"}
            ]}"#,
        );
        let store = Arc::new(InMemorySongStore::new());
        let loader = SeedLoader::with_seed_path(store.clone(), &seed.0);
        loader.populate().await.unwrap();

        let mut listed: Vec<Song> = SongService::new(store.clone())
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|mut s| {
                s.object_id = None;
                s
            })
            .collect();
        listed.sort_by_key(|s| s.id);

        let mut expected = read_seed(&seed.0).await.unwrap();
        expected.sort_by_key(|s| s.id);
        assert_eq!(listed, expected);
        assert_eq!(listed[1].liked, None);
    }

    #[tokio::test]
    async fn test_populate_missing_file_is_io_error() {
        let path = std::env::temp_dir().join(format!("missing_{}.json", Uuid::new_v4()));
        let loader = SeedLoader::with_seed_path(Arc::new(InMemorySongStore::new()), &path);
        let err = loader.populate().await.unwrap_err();
        assert!(matches!(err, SongError::Io { .. }));
    }

    #[tokio::test]
    async fn test_populate_invalid_json_is_parse_error() {
        let seed = TempSeed::write("{ not json");
        let loader = SeedLoader::with_seed_path(Arc::new(InMemorySongStore::new()), &seed.0);
        let err = loader.populate().await.unwrap_err();
        assert!(matches!(err, SongError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_populate_missing_songs_field_is_parse_error() {
        let seed = TempSeed::write(r#"{"tracks":[]}"#);
        let store = Arc::new(InMemorySongStore::new());
        let loader = SeedLoader::with_seed_path(store.clone(), &seed.0);
        let err = loader.populate().await.unwrap_err();
        assert!(matches!(err, SongError::Parse { .. }));
        assert!(store.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_populate_empty_list() {
        let seed = TempSeed::write(r#"{"songs":[]}"#);
        let loader = SeedLoader::with_seed_path(Arc::new(InMemorySongStore::new()), &seed.0);
        assert_eq!(loader.populate().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_populate_twice_duplicates() {
        let seed = TempSeed::write(SINGLE_SONG);
        let store = Arc::new(InMemorySongStore::new());
        let loader = SeedLoader::with_seed_path(store.clone(), &seed.0);
        loader.populate().await.unwrap();
        loader.populate().await.unwrap();
        assert_eq!(store.count(&SongFilter::ById(1)).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_populate_if_empty_skips_populated_store() {
        let seed = TempSeed::write(SINGLE_SONG);
        let store = Arc::new(InMemorySongStore::with_songs(vec![Song::new(
            9, "Existing", "Y", "Folk", None,
        )]));
        let loader = SeedLoader::with_seed_path(store.clone(), &seed.0);

        assert_eq!(loader.populate_if_empty().await.unwrap(), 0);
        assert_eq!(store.count(&SongFilter::All).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_populate_if_empty_seeds_empty_store() {
        let seed = TempSeed::write(SINGLE_SONG);
        let store = Arc::new(InMemorySongStore::new());
        let loader = SeedLoader::with_seed_path(store.clone(), &seed.0);

        assert_eq!(loader.populate_if_empty().await.unwrap(), 1);
        assert_eq!(loader.seed_path(), seed.0.as_path());
    }
}
