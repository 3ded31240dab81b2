use super::mem_backend::MemBackend;
use super::note_store::NoteStore;

pub type InMemoryStore = NoteStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        NoteStore::open(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::model::Note;

    pub struct StoreFixture {
        notes: Vec<Note>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self { notes: Vec::new() }
        }

        /// Adds `count` numbered notes, in display order.
        pub fn with_notes(mut self, count: usize) -> Self {
            for _ in 0..count {
                let n = self.notes.len() + 1;
                self.notes.push(Note::new(
                    format!("Test Note {}", n),
                    format!("Content for note {}", n),
                ));
            }
            self
        }

        pub fn with_note(mut self, title: &str, content: &str) -> Self {
            self.notes.push(Note::new(title, content));
            self
        }

        pub fn build(self) -> InMemoryStore {
            NoteStore::open(MemBackend::with_notes(self.notes))
        }
    }
}
