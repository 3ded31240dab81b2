//! # Storage Layer
//!
//! Two pieces, split the same way as the rest of the crate:
//!
//! - [`backend::StorageBackend`]: the persistence adapter. A durable slot that
//!   can `load` and `save` the whole collection and knows nothing else.
//! - [`note_store::NoteStore`]: the single source of truth for the collection,
//!   selection and draft. It is generic over the backend and saves through it
//!   after every mutation.
//!
//! ## Persistence Contract
//!
//! Mutations are save-then-commit: the store builds the next collection, asks
//! the backend to save it, and only then swaps it in. A failing backend makes
//! the operation return an error and the store keeps its previous state.
//!
//! Loading is forgiving: nothing stored and a failed load both start the
//! store with a single blank note.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one JSON file (`notes.json`) written atomically.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! └── notes.json      # Same format as an exported file
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod note_store;
