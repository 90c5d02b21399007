//! Services organized by domain concern.

pub mod seed_service;
pub mod song_service;

pub use seed_service::{read_seed, SeedLoader};
pub use song_service::SongService;
