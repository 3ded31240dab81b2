use crate::commands::{CmdMessage, CmdResult, IndexedNote};
use crate::error::{NotesError, Result};
use crate::store::backend::StorageBackend;
use crate::store::note_store::NoteStore;

#[derive(Debug, Clone, Default)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteUpdate {
    pub fn title(text: impl Into<String>) -> Self {
        Self {
            title: Some(text.into()),
            content: None,
        }
    }

    pub fn content(text: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(text.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Apply `update` to the active note in a single commit.
pub fn run<B: StorageBackend>(store: &mut NoteStore<B>, update: &NoteUpdate) -> Result<CmdResult> {
    let active = store.active_index().ok_or(NotesError::NoSelection)?;
    if update.is_empty() {
        return Ok(CmdResult::default());
    }

    store.update(update.title.as_deref(), update.content.as_deref())?;

    let updated = IndexedNote::at(store, active).into_iter().collect();
    let mut result = CmdResult::default().with_affected_notes(updated);
    result.add_message(CmdMessage::success(format!(
        "Note updated: {}",
        store.draft().title
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Note;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_active_note_only() {
        let mut store = StoreFixture::new().with_notes(2).build();
        store.select(1).unwrap();
        let update = NoteUpdate {
            title: Some("Renamed".into()),
            content: Some("Body".into()),
        };
        let res = run(&mut store, &update).unwrap();

        assert_eq!(store.notes()[1], Note::new("Renamed", "Body"));
        assert_eq!(store.notes()[0].title, "Test Note 1");
        assert_eq!(store.active_index(), Some(1));
        assert_eq!(res.affected_notes[0].index, 1);
    }

    #[test]
    fn failed_save_applies_neither_field() {
        let mut store = StoreFixture::new().with_note("Old", "old body").build();
        store.backend().set_save_limit(0);
        let update = NoteUpdate {
            title: Some("New".into()),
            content: Some("new body".into()),
        };

        assert!(run(&mut store, &update).is_err());
        assert_eq!(store.notes()[0], Note::new("Old", "old body"));
        assert_eq!(store.draft().title, "Old");
    }

    #[test]
    fn title_only_keeps_content() {
        let mut store = StoreFixture::new().with_note("Old", "keep me").build();
        run(&mut store, &NoteUpdate::title("New")).unwrap();
        assert_eq!(store.notes()[0], Note::new("New", "keep me"));
    }

    #[test]
    fn empty_update_does_nothing() {
        let mut store = StoreFixture::new().with_notes(1).build();
        let res = run(&mut store, &NoteUpdate::default()).unwrap();
        assert!(res.messages.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn update_on_empty_store_fails() {
        let mut store = StoreFixture::new().build();
        let err = run(&mut store, &NoteUpdate::content("x")).unwrap_err();
        assert!(matches!(err, NotesError::NoSelection));
    }
}
