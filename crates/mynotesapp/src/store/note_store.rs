use super::backend::StorageBackend;
use crate::error::{NotesError, Result};
use crate::interact::{Confirm, DELETE_PROMPT};
use crate::model::{Draft, Note, Selection, DEFAULT_TITLE};
use log::{debug, info, warn};

/// What `delete` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The prompt was declined; nothing changed.
    Cancelled,
    Deleted {
        removed: Note,
        /// Position the draft content was refreshed from, `None` if the store is now empty.
        draft_source: Option<usize>,
    },
}

/// Owns the note collection, the selection and the draft.
///
/// Every mutation builds the next state, hands it to the backend, and only
/// commits it once the save succeeded. A failed save therefore leaves the
/// store exactly as it was.
pub struct NoteStore<B: StorageBackend> {
    backend: B,
    notes: Vec<Note>,
    selection: Selection,
    draft: Draft,
    default_title: String,
    revision: u64,
}

impl<B: StorageBackend> NoteStore<B> {
    pub fn open(backend: B) -> Self {
        Self::open_with_title(backend, DEFAULT_TITLE)
    }

    /// Load the collection from `backend`, seeding a single blank note when
    /// nothing usable is stored. Load failures are treated as "nothing stored".
    pub fn open_with_title(backend: B, default_title: &str) -> Self {
        let notes = match backend.load() {
            Ok(Some(notes)) => notes,
            Ok(None) => {
                debug!("no stored notes, starting with a blank note");
                vec![Note::blank(default_title)]
            }
            Err(e) => {
                warn!("failed to load notes, starting with a blank note: {}", e);
                vec![Note::blank(default_title)]
            }
        };
        let selection = Selection::first_of(notes.len());
        let draft = selection
            .index()
            .map(|i| Draft::from_note(&notes[i]))
            .unwrap_or_default();
        Self {
            backend,
            notes,
            selection,
            draft,
            default_title: default_title.to_string(),
            revision: 0,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn active_index(&self) -> Option<usize> {
        self.selection.index()
    }

    pub fn active_note(&self) -> Option<&Note> {
        self.active_index().and_then(|i| self.notes.get(i))
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Number of committed mutations since the store was opened.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Insert a blank note at the front and select it.
    pub fn create(&mut self) -> Result<()> {
        self.create_with(None, None)
    }

    /// Insert a note at the front, filling in whichever fields are given, and
    /// select it. The whole note is saved in one commit.
    pub fn create_with(&mut self, title: Option<&str>, content: Option<&str>) -> Result<()> {
        let mut note = Note::blank(&self.default_title);
        if let Some(title) = title {
            note.title = title.to_string();
        }
        if let Some(content) = content {
            note.content = content.to_string();
        }
        let mut notes = Vec::with_capacity(self.notes.len() + 1);
        notes.push(note.clone());
        notes.extend(self.notes.iter().cloned());
        self.commit(notes, Selection::Active(0), Draft::from_note(&note))?;
        info!("created note, {} notes total", self.notes.len());
        Ok(())
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        let draft = Draft::from_note(self.checked(index)?);
        self.draft = draft;
        self.selection = Selection::Active(index);
        debug!("selected note {}", index);
        Ok(())
    }

    /// Remove the note at `index` once `confirm` agrees.
    ///
    /// When the removed position is at or before the active one, the active
    /// index steps back by one (never below zero). The draft content is then
    /// refreshed from the note just before the removed position, which is not
    /// necessarily the newly active note. Removing position 0 refreshes from
    /// the new first note.
    pub fn delete(&mut self, index: usize, confirm: &dyn Confirm) -> Result<DeleteOutcome> {
        self.checked(index)?;
        if !confirm.confirm(DELETE_PROMPT) {
            debug!("delete of note {} cancelled", index);
            return Ok(DeleteOutcome::Cancelled);
        }

        let mut notes = self.notes.clone();
        let removed = notes.remove(index);

        let mut selection = match self.selection {
            Selection::Active(active) if active >= index => {
                Selection::Active(active.saturating_sub(1))
            }
            other => other,
        };
        let mut draft = self.draft.clone();
        let draft_source = if notes.is_empty() {
            selection = Selection::Empty;
            draft.clear();
            None
        } else {
            let source = index.saturating_sub(1);
            draft.content = notes[source].content.clone();
            Some(source)
        };

        self.commit(notes, selection, draft)?;
        info!("deleted note {}, {} notes left", index, self.notes.len());
        Ok(DeleteOutcome::Deleted {
            removed,
            draft_source,
        })
    }

    /// Commit `text` as the active note's title, keeping the draft content.
    pub fn update_title(&mut self, text: &str) -> Result<()> {
        self.update(Some(text), None)
    }

    /// Commit `text` as the active note's content, keeping the draft title.
    pub fn update_content(&mut self, text: &str) -> Result<()> {
        self.update(None, Some(text))
    }

    /// Commit the given fields to the active note in one save. Fields left as
    /// `None` keep the draft's current value.
    pub fn update(&mut self, title: Option<&str>, content: Option<&str>) -> Result<()> {
        let active = self.active_index().ok_or(NotesError::NoSelection)?;
        let draft = Draft {
            title: title.map_or_else(|| self.draft.title.clone(), str::to_string),
            content: content.map_or_else(|| self.draft.content.clone(), str::to_string),
        };
        let mut notes = self.notes.clone();
        notes[active] = Note::new(draft.title.clone(), draft.content.clone());
        self.commit(notes, self.selection, draft)
    }

    /// Swap in a whole new collection and select its first note.
    pub fn replace_all(&mut self, notes: Vec<Note>) -> Result<()> {
        let selection = Selection::first_of(notes.len());
        let draft = selection
            .index()
            .map(|i| Draft::from_note(&notes[i]))
            .unwrap_or_default();
        self.commit(notes, selection, draft)?;
        info!("replaced collection, {} notes", self.notes.len());
        Ok(())
    }

    fn checked(&self, index: usize) -> Result<&Note> {
        self.notes.get(index).ok_or(NotesError::IndexOutOfRange {
            index,
            len: self.notes.len(),
        })
    }

    fn commit(&mut self, notes: Vec<Note>, selection: Selection, draft: Draft) -> Result<()> {
        if !selection.is_valid_for(notes.len()) {
            return Err(NotesError::Store(format!(
                "refusing to commit {:?} for {} notes",
                selection,
                notes.len()
            )));
        }
        self.backend.save(&notes)?;
        self.notes = notes;
        self.selection = selection;
        self.draft = draft;
        self.revision += 1;
        Ok(())
    }
}
