use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Song document stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Song {
    /// Store-internal primary key, assigned by MongoDB on insert
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<ObjectId>,
    /// Stable identifier used by callers
    pub id: i64,
    pub name: String,
    pub artist: String,
    pub genre: String,
    /// Absent on records that were never given a liked state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liked: Option<bool>,
}

impl Song {
    pub fn new(id: i64, name: &str, artist: &str, genre: &str, liked: Option<bool>) -> Self {
        Self {
            object_id: None,
            id,
            name: name.to_string(),
            artist: artist.to_string(),
            genre: genre.to_string(),
            liked,
        }
    }

    pub fn like_state(&self) -> LikeState {
        LikeState::from(self.liked)
    }
}

/// Tagged view of the `liked` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeState {
    Liked,
    Disliked,
    Unset,
}

impl From<Option<bool>> for LikeState {
    fn from(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => LikeState::Liked,
            Some(false) => LikeState::Disliked,
            None => LikeState::Unset,
        }
    }
}

impl fmt::Display for LikeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LikeState::Liked => write!(f, "liked"),
            LikeState::Disliked => write!(f, "disliked"),
            LikeState::Unset => write!(f, "unset"),
        }
    }
}

impl LikeState {
    /// The stored representation of this state.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            LikeState::Liked => Some(true),
            LikeState::Disliked => Some(false),
            LikeState::Unset => None,
        }
    }

    /// The state a toggle moves to. `Unset` has no successor.
    pub fn toggled(&self) -> Option<LikeState> {
        match self {
            LikeState::Liked => Some(LikeState::Disliked),
            LikeState::Disliked => Some(LikeState::Liked),
            LikeState::Unset => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_state_from_flag() {
        assert_eq!(LikeState::from(Some(true)), LikeState::Liked);
        assert_eq!(LikeState::from(Some(false)), LikeState::Disliked);
        assert_eq!(LikeState::from(None), LikeState::Unset);
    }

    #[test]
    fn test_like_state_toggle() {
        assert_eq!(LikeState::Liked.toggled(), Some(LikeState::Disliked));
        assert_eq!(LikeState::Disliked.toggled(), Some(LikeState::Liked));
        assert_eq!(LikeState::Unset.toggled(), None);
        assert_eq!(LikeState::Liked.as_flag(), Some(true));
        assert_eq!(LikeState::Unset.as_flag(), None);
    }

    #[test]
    fn test_song_without_liked_deserializes_as_unset() {
        let song: Song =
            serde_json::from_str(r#"{"id":7,"name":"A","artist":"X","genre":"Pop"}"#).unwrap();
        assert_eq!(song.liked, None);
        assert_eq!(song.like_state(), LikeState::Unset);
        assert_eq!(song.object_id, None);
    }

    #[test]
    fn test_song_serialization_omits_absent_fields() {
        let song = Song::new(3, "A", "X", "Pop", None);
        let value = serde_json::to_value(&song).unwrap();
        assert!(value.get("_id").is_none());
        assert!(value.get("liked").is_none());
        assert_eq!(value["id"], 3);
    }

    #[test]
    fn test_song_bson_round_trip_keeps_liked() {
        let song = Song::new(1, "A", "X", "Pop", Some(false));
        let doc = mongodb::bson::to_document(&song).unwrap();
        assert_eq!(doc.get_bool("liked").unwrap(), false);
        assert_eq!(doc.get_i64("id").unwrap(), 1);
        let back: Song = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(back, song);
    }
}
