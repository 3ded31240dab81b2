//! # Notes File Format
//!
//! The whole collection is exchanged as one JSON document: an array of
//! `{"title": ..., "content": ...}` objects in display order.
//!
//! ```text
//! [
//!   { "title": "Shopping", "content": "milk, eggs" },
//!   { "title": "New note", "content": "" }
//! ]
//! ```
//!
//! The same encoding backs [`crate::store::fs_backend::FsBackend`], so an
//! exported file and the on-disk store are interchangeable.
//!
//! `deserialize(serialize(notes)) == notes` for every collection. Decoding
//! rejects anything that is not an array of objects with string `title` and
//! `content` fields; extra fields are ignored.

use crate::error::{NotesError, Result};
use crate::model::Note;
use crate::transfer::FileFilter;

/// Filter handed to the file pickers for export and import.
pub const EXPORT_FILTER: FileFilter = FileFilter {
    name: "JSON",
    extensions: &["json"],
};

pub fn serialize(notes: &[Note]) -> Result<String> {
    serde_json::to_string_pretty(notes).map_err(NotesError::Serialization)
}

pub fn deserialize(text: &str) -> Result<Vec<Note>> {
    serde_json::from_str(text).map_err(|e| NotesError::Format(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Note> {
        vec![
            Note::new("Shopping", "milk, eggs"),
            Note::new("", ""),
            Note::new("Shopping", "# heading\n\n- *item*\n\t\"quoted\" \\ ünïcødé 🎉"),
        ]
    }

    #[test]
    fn round_trip_preserves_order_and_fields() {
        let notes = sample();
        let text = serialize(&notes).unwrap();
        assert_eq!(deserialize(&text).unwrap(), notes);
    }

    #[test]
    fn round_trip_empty_collection() {
        let text = serialize(&[]).unwrap();
        assert_eq!(text, "[]");
        assert!(deserialize(&text).unwrap().is_empty());
    }

    #[test]
    fn reads_compact_json_from_other_writers() {
        let notes = deserialize(r#"[{"title":"New note","content":""}]"#).unwrap();
        assert_eq!(notes, vec![Note::default()]);
    }

    #[test]
    fn ignores_unknown_fields() {
        let notes = deserialize(r#"[{"title":"a","content":"b","pinned":true}]"#).unwrap();
        assert_eq!(notes, vec![Note::new("a", "b")]);
    }

    #[test]
    fn rejects_non_json() {
        let err = deserialize("not json").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn rejects_wrong_shape() {
        for text in [
            r#"{"title":"a","content":"b"}"#,
            r#"[{"title":"a"}]"#,
            r#"[{"title":1,"content":"b"}]"#,
            r#"["a","b"]"#,
            r#"null"#,
        ] {
            assert!(deserialize(text).unwrap_err().is_format(), "{}", text);
        }
    }
}
