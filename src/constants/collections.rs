//! Collection and field names used by the songs store.

/// Default name of the songs collection, overridable via `DB_COLLECTION_SONGS`.
pub const DEFAULT_COLLECTION_SONGS: &str = "songs";

/// Default location of the seed document, overridable via `SONGS_SEED_PATH`.
pub const DEFAULT_SEED_PATH: &str = "data/songs.json";

pub const FIELD_ID: &str = "id";
pub const FIELD_NAME: &str = "name";
pub const FIELD_ARTIST: &str = "artist";
pub const FIELD_GENRE: &str = "genre";
pub const FIELD_LIKED: &str = "liked";

/// Fields matched by the text search, in the order they appear in the `$or` clause.
pub const SEARCHABLE_FIELDS: [&str; 3] = [FIELD_NAME, FIELD_ARTIST, FIELD_GENRE];
