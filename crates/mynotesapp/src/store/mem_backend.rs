use super::backend::StorageBackend;
use crate::error::{NotesError, Result};
use crate::model::Note;
use std::cell::{Cell, RefCell};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since mynotes is single-threaded,
/// so `StorageBackend` can take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    notes: RefCell<Option<Vec<Note>>>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
    simulate_read_error: Cell<bool>,
    save_limit: Cell<Option<usize>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `notes`, as if saved by an earlier session.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        let backend = Self::default();
        *backend.notes.borrow_mut() = Some(notes);
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Let `limit` more saves succeed, then fail every one after.
    pub fn set_save_limit(&self, limit: usize) {
        self.save_limit.set(Some(self.saves.get() + limit));
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// What the backend currently holds.
    pub fn stored(&self) -> Option<Vec<Note>> {
        self.notes.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Option<Vec<Note>>> {
        if self.simulate_read_error.get() {
            return Err(NotesError::Store("Simulated read error".to_string()));
        }
        Ok(self.notes.borrow().clone())
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(NotesError::Store("Simulated write error".to_string()));
        }
        if self.save_limit.get().is_some_and(|limit| self.saves.get() >= limit) {
            return Err(NotesError::Store("Simulated write error".to_string()));
        }
        *self.notes.borrow_mut() = Some(notes.to_vec());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
