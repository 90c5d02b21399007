//! Data-access layer for a song library stored in MongoDB.
//!
//! [`services::SongService`] lists, fetches, searches and toggles the liked
//! flag of songs; [`services::SeedLoader`] fills the collection from a JSON
//! seed document. Both work through the [`repositories::SongStore`] trait so
//! the database handle is injected by the caller.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;

pub use errors::SongError;
pub use models::{LikeState, Song};
pub use repositories::{InMemorySongStore, MongoSongStore, SongStore};
pub use services::{SeedLoader, SongService};
