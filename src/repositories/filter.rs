//! Filter and update expressions understood by every [`SongStore`](super::SongStore).
//!
//! Each expression renders to the MongoDB document the driver sends, and the
//! in-memory store evaluates the same semantics directly.

use mongodb::bson::{doc, Document, Regex};
use mongodb::options::UpdateModifications;

use crate::constants::{FIELD_ID, FIELD_LIKED, SEARCHABLE_FIELDS};

/// Which songs a store call applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum SongFilter {
    /// Every song in the collection.
    All,
    /// Songs whose `id` equals the value.
    ById(i64),
    /// Songs whose `id` equals the value and whose `liked` flag is a boolean.
    ByIdWithLikedState(i64),
    /// Songs whose `liked` flag equals the value.
    ByLiked(bool),
    /// Songs whose name, artist or genre matches the pattern.
    Text(TextPattern),
}

impl SongFilter {
    pub fn to_document(&self) -> Document {
        match self {
            SongFilter::All => doc! {},
            SongFilter::ById(id) => doc! { FIELD_ID: *id },
            SongFilter::ByIdWithLikedState(id) => {
                doc! { FIELD_ID: *id, FIELD_LIKED: { "$type": "bool" } }
            }
            SongFilter::ByLiked(liked) => doc! { FIELD_LIKED: *liked },
            SongFilter::Text(text) => {
                let regex = text.to_bson_regex();
                let clauses: Vec<Document> = SEARCHABLE_FIELDS
                    .iter()
                    .copied()
                    .map(|field| doc! { field: { "$regex": regex.clone() } })
                    .collect();
                doc! { "$or": clauses }
            }
        }
    }
}

/// A regular-expression fragment matched against the searchable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPattern {
    pub pattern: String,
    pub case_sensitive: bool,
}

impl TextPattern {
    /// Use `pattern` as-is. Metacharacters keep their regex meaning, so
    /// untrusted input must be escaped by the caller.
    pub fn raw(pattern: &str, case_sensitive: bool) -> Self {
        Self {
            pattern: pattern.to_string(),
            case_sensitive,
        }
    }

    /// Match `text` literally.
    pub fn literal(text: &str, case_sensitive: bool) -> Self {
        Self {
            pattern: regex::escape(text),
            case_sensitive,
        }
    }

    /// MongoDB regex options for this pattern.
    pub fn options(&self) -> &'static str {
        if self.case_sensitive {
            ""
        } else {
            "i"
        }
    }

    pub fn to_bson_regex(&self) -> Regex {
        Regex {
            pattern: self.pattern.clone(),
            options: self.options().to_string(),
        }
    }
}

/// Modification applied by `find_one_and_update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongUpdate {
    /// Negate `liked` in place, so the read and the write are one server step.
    ToggleLiked,
}

impl SongUpdate {
    pub fn to_modifications(&self) -> UpdateModifications {
        match self {
            SongUpdate::ToggleLiked => UpdateModifications::Pipeline(vec![
                doc! { "$set": { FIELD_LIKED: { "$not": ["$liked"] } } },
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_all_filter_is_empty() {
        assert!(SongFilter::All.to_document().is_empty());
    }

    #[test]
    fn test_id_filters() {
        assert_eq!(SongFilter::ById(4).to_document(), doc! { "id": 4_i64 });
        assert_eq!(
            SongFilter::ByIdWithLikedState(4).to_document(),
            doc! { "id": 4_i64, "liked": { "$type": "bool" } }
        );
        assert_eq!(
            SongFilter::ByLiked(true).to_document(),
            doc! { "liked": true }
        );
    }

    #[test]
    fn test_text_filter_ors_three_fields() {
        let filter = SongFilter::Text(TextPattern::raw("rock", false)).to_document();
        let clauses = filter.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 3);

        let fields: Vec<&str> = clauses
            .iter()
            .map(|clause| match clause {
                Bson::Document(d) => d.keys().next().unwrap().as_str(),
                other => panic!("unexpected clause {:?}", other),
            })
            .collect();
        assert_eq!(fields, vec!["name", "artist", "genre"]);

        let name = clauses[0].as_document().unwrap().get_document("name").unwrap();
        match name.get("$regex") {
            Some(Bson::RegularExpression(regex)) => {
                assert_eq!(regex.pattern, "rock");
                assert_eq!(regex.options, "i");
            }
            other => panic!("expected regex, got {:?}", other),
        }
    }

    #[test]
    fn test_case_sensitive_pattern_has_no_options() {
        let pattern = TextPattern::raw("rock", true);
        assert_eq!(pattern.options(), "");
        assert_eq!(pattern.to_bson_regex().options, "");
    }

    #[test]
    fn test_literal_pattern_escapes_metacharacters() {
        let pattern = TextPattern::literal("AC/DC (live).*", false);
        assert_eq!(pattern.pattern, r"AC/DC \(live\)\.\*");
        assert!(!pattern.case_sensitive);
    }

    #[test]
    fn test_toggle_liked_is_a_pipeline_update() {
        match SongUpdate::ToggleLiked.to_modifications() {
            UpdateModifications::Pipeline(stages) => {
                assert_eq!(
                    stages,
                    vec![doc! { "$set": { "liked": { "$not": ["$liked"] } } }]
                );
            }
            other => panic!("expected pipeline, got {:?}", other),
        }
    }
}
