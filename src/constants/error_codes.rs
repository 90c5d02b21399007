//! Error code constants.
//!
//! These codes provide a machine-readable identifier for each error type,
//! so the request layer can map failures without matching on messages.

// Song errors
pub const CODE_SONG_NOT_FOUND: &str = "SONG_NOT_FOUND";
pub const CODE_LIKED_UNSET: &str = "LIKED_UNSET";
pub const CODE_INVALID_PATTERN: &str = "INVALID_PATTERN";

// Seed errors
pub const CODE_SEED_IO_ERROR: &str = "SEED_IO_ERROR";
pub const CODE_SEED_PARSE_ERROR: &str = "SEED_PARSE_ERROR";

// Store errors
pub const CODE_STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
pub const CODE_MALFORMED_DOCUMENT: &str = "MALFORMED_DOCUMENT";
