use std::sync::Arc;

use log::{error, info};
use mongodb::bson::doc;
use mongodb::Client;

use song_library::config::CONFIG;
use song_library::constants::{ERR_STORE_UNAVAILABLE, MSG_STORE_CONNECTED};
use song_library::{MongoSongStore, SeedLoader, SongError, SongService, SongStore};

#[tokio::main]
async fn main() {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    if let Err(e) = run().await {
        error!("[{}] {}", e.code(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), SongError> {
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri).await?;
    let db = client.database(&CONFIG.database_name);

    // Test MongoDB connection
    db.run_command(doc! { "ping": 1 }).await.map_err(|e| {
        error!("{}: {}", ERR_STORE_UNAVAILABLE, e);
        e
    })?;
    info!("{}", MSG_STORE_CONNECTED);

    let store: Arc<dyn SongStore> =
        Arc::new(MongoSongStore::new(&db, &CONFIG.songs_collection));
    let seed_loader = SeedLoader::new(Arc::clone(&store));
    let song_service = SongService::new(store);

    let seeded = seed_loader.populate_if_empty().await?;
    if seeded > 0 {
        info!("Inserted {} songs into '{}'", seeded, CONFIG.songs_collection);
    }

    let total = song_service.count().await?;
    let liked = song_service.count_liked().await?;
    info!(
        "Songs collection '{}' ready: {} songs, {} liked",
        CONFIG.songs_collection, total, liked
    );

    Ok(())
}
