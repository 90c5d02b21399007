//! Error message constants used throughout the crate.

// Song errors
pub const ERR_SONG_NOT_FOUND: &str = "Song not found";
pub const ERR_LIKED_UNSET: &str = "Song has no liked state to toggle";
pub const ERR_INVALID_PATTERN: &str = "Invalid search pattern";

// Seed errors
pub const ERR_SEED_READ: &str = "Failed to read seed file";
pub const ERR_SEED_PARSE: &str = "Failed to parse seed file";

// Store errors
pub const ERR_STORE_UNAVAILABLE: &str = "Song store unavailable";
pub const ERR_MALFORMED_DOCUMENT: &str = "Stored song document could not be decoded";
