use crate::commands::{CmdMessage, CmdResult, IndexedNote};
use crate::error::Result;
use crate::interact::Confirm;
use crate::model::Draft;
use crate::store::backend::StorageBackend;
use crate::store::note_store::{DeleteOutcome, NoteStore};

pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    index: usize,
    confirm: &dyn Confirm,
) -> Result<CmdResult> {
    let removed = match store.delete(index, confirm)? {
        DeleteOutcome::Cancelled => return Ok(CmdResult::cancelled("Delete cancelled.")),
        DeleteOutcome::Deleted { removed, .. } => removed,
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note deleted: {}",
        removed.title
    )));
    result.affected_notes.push(IndexedNote {
        index,
        note: removed,
        active: false,
    });

    // The draft content is refreshed from the position before the deleted
    // one and its title is left alone, so the editor can disagree with the
    // note now active.
    if let Some(active) = store.active_note() {
        let draft = store.draft();
        if Draft::from_note(active) != *draft {
            result.add_message(CmdMessage::warning(format!(
                "Editor shows \"{}\" with content from note {}, not the active note \"{}\".",
                draft.title,
                index.saturating_sub(1) + 1,
                active.title
            )));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interact::{AlwaysConfirm, NeverConfirm};
    use crate::model::Selection;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_confirmed_note() {
        let mut store = StoreFixture::new().with_notes(2).build();
        let res = run(&mut store, 0, &AlwaysConfirm).unwrap();

        assert!(!res.cancelled);
        assert_eq!(store.len(), 1);
        assert_eq!(res.affected_notes[0].note.title, "Test Note 1");
        assert!(res.messages[0].content.contains("Note deleted: Test Note 1"));
    }

    #[test]
    fn declined_delete_is_cancelled() {
        let mut store = StoreFixture::new().with_notes(2).build();
        let res = run(&mut store, 0, &NeverConfirm).unwrap();

        assert!(res.cancelled);
        assert_eq!(store.len(), 2);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn deleting_last_note_leaves_empty_selection() {
        let mut store = StoreFixture::new().with_notes(1).build();
        run(&mut store, 0, &AlwaysConfirm).unwrap();
        assert_eq!(store.selection(), Selection::Empty);
    }

    #[test]
    fn warns_when_draft_differs_from_active_note() {
        let mut store = StoreFixture::new().with_notes(3).build();
        store.select(2).unwrap();
        let res = run(&mut store, 1, &AlwaysConfirm).unwrap();

        assert!(res
            .messages
            .iter()
            .any(|m| m.level == crate::commands::MessageLevel::Warning));
    }

    #[test]
    fn deleting_after_active_reloads_draft_from_other_note() {
        let mut store = StoreFixture::new().with_notes(3).build();
        let res = run(&mut store, 2, &AlwaysConfirm).unwrap();

        assert_eq!(store.active_index(), Some(0));
        assert_eq!(store.draft().content, "Content for note 2");
        assert_eq!(res.messages.len(), 2);
    }

    #[test]
    fn deleting_active_note_warns_about_stale_title() {
        let mut store = StoreFixture::new().with_notes(3).build();
        store.select(1).unwrap();
        let res = run(&mut store, 1, &AlwaysConfirm).unwrap();

        assert_eq!(store.active_note().unwrap().title, "Test Note 1");
        assert_eq!(store.draft().title, "Test Note 2");
        assert_eq!(store.draft().content, "Content for note 1");

        let warning = res
            .messages
            .iter()
            .find(|m| m.level == crate::commands::MessageLevel::Warning)
            .unwrap();
        assert!(warning.content.contains("\"Test Note 2\""));
        assert!(warning.content.contains("\"Test Note 1\""));
    }

    #[test]
    fn no_warning_when_draft_matches_active_note() {
        let mut store = StoreFixture::new().with_notes(3).build();
        let res = run(&mut store, 1, &AlwaysConfirm).unwrap();

        assert_eq!(store.draft().content, "Content for note 1");
        assert_eq!(res.messages.len(), 1);
    }
}
