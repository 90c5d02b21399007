//! Informational message constants used in logs.

pub const MSG_STORE_CONNECTED: &str = "Connected to MongoDB successfully!";
pub const MSG_SEED_SKIPPED: &str = "Songs collection already populated, skipping seed";
