//! Data models organized by type.

pub mod seed;
pub mod song;

pub use seed::*;
pub use song::*;
