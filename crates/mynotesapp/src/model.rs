//! # Domain Model
//!
//! Three small types make up the whole state of the application:
//!
//! - [`Note`]: a `title`/`content` pair. Titles are free text, need not be
//!   unique, and content may hold Markdown (rendering is a UI concern).
//! - [`Selection`]: which position of the collection is active, or
//!   [`Selection::Empty`] when there are no notes.
//! - [`Draft`]: the editable working copy of the active note. Edits commit
//!   through the draft into the collection entry.
//!
//! ## Selection Invariant
//!
//! A non-empty collection always has `Selection::Active(i)` with
//! `i < len`; an empty collection always has `Selection::Empty`.
//! [`crate::store::note_store::NoteStore`] is the only code that moves the
//! selection and it re-checks the invariant after every transition.

use serde::{Deserialize, Serialize};

/// Title given to notes created without one.
pub const DEFAULT_TITLE: &str = "New note";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub content: String,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// The note inserted by `create` and used to seed an empty store.
    pub fn blank(title: &str) -> Self {
        Self::new(title, "")
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::blank(DEFAULT_TITLE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    Active(usize),
}

impl Selection {
    /// Selection for a freshly loaded or imported collection of `len` notes.
    pub fn first_of(len: usize) -> Self {
        if len == 0 {
            Selection::Empty
        } else {
            Selection::Active(0)
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Selection::Empty => None,
            Selection::Active(i) => Some(*i),
        }
    }

    pub fn is_valid_for(&self, len: usize) -> bool {
        match self {
            Selection::Empty => len == 0,
            Selection::Active(i) => *i < len,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}
