//! # Command Layer
//!
//! One submodule per user action. Commands drive the [`NoteStore`] and the
//! external collaborators (prompt, file transfer, notifications) and return a
//! structured [`CmdResult`] instead of printing anything.
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: no stdout, stderr or styling
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Positions
//!
//! Commands speak 0-based positions, exactly like the store. Converting to
//! the 1-based numbers users see is a UI concern.
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore`, `MemTransfer` and `MemNotifier` so no
//! test touches the filesystem or a terminal.
//!
//! ## Command Modules
//!
//! - [`create`]: Insert a new note at the front
//! - [`list`]: List notes with the active one marked
//! - [`select`]: Make a note active and show it
//! - [`update`]: Edit the active note's title and/or content
//! - [`delete`]: Delete a note after confirmation
//! - [`export`]: Write the whole collection to a file
//! - [`import`]: Replace the collection from a file

use crate::model::Note;
use crate::store::backend::StorageBackend;
use crate::store::note_store::NoteStore;

pub mod create;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod select;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A note paired with its position and whether it is the active one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedNote {
    pub index: usize,
    pub note: Note,
    pub active: bool,
}

impl IndexedNote {
    pub fn at<B: StorageBackend>(store: &NoteStore<B>, index: usize) -> Option<Self> {
        store.note(index).map(|note| Self {
            index,
            note: note.clone(),
            active: store.active_index() == Some(index),
        })
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<IndexedNote>,
    pub listed_notes: Vec<IndexedNote>,
    pub messages: Vec<CmdMessage>,
    /// Set when the user backed out at a prompt or picker.
    pub cancelled: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<IndexedNote>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<IndexedNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        let mut result = Self {
            cancelled: true,
            ..Default::default()
        };
        result.add_message(CmdMessage::info(message));
        result
    }
}
