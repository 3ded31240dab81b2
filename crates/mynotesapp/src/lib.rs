//! # mynotesapp
//!
//! The UI-agnostic core of mynotes: an ordered collection of short text
//! notes, the active selection and its editable draft, plus export and import
//! of the whole collection as one JSON file.
//!
//! ## Layering
//!
//! ```text
//! UI (CLI, shell, ...)
//!   └─ api::NotesApi            one entry point, owns the store
//!        └─ commands::*         one module per user action, returns CmdResult
//!             ├─ store::NoteStore        collection + selection + draft
//!             │    └─ StorageBackend     durable slot (FsBackend, MemBackend)
//!             ├─ codec                   JSON encoding of the collection
//!             ├─ transfer::FileTransfer  file pickers + raw file I/O
//!             └─ interact::{Confirm, Notify}
//! ```
//!
//! Everything here is single-threaded: the store is mutated through
//! `&mut self` only, and backends rely on `RefCell`/`Cell` for interior
//! mutability.

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod interact;
pub mod model;
pub mod store;
pub mod transfer;

pub use api::NotesApi;
pub use error::{NotesError, Result};
pub use model::{Draft, Note, Selection};
pub use store::note_store::{DeleteOutcome, NoteStore};
