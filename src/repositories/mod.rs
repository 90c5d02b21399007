//! Repository layer for database operations.
//!
//! This module separates the accessor logic (services) from the store that
//! executes filters, so the services can run against MongoDB or an in-memory
//! collection.

pub mod filter;
pub mod memory_store;
pub mod mongo_store;
pub mod song_store;

pub use filter::{SongFilter, SongUpdate, TextPattern};
pub use memory_store::InMemorySongStore;
pub use mongo_store::MongoSongStore;
pub use song_store::SongStore;
