use crate::commands::{CmdMessage, CmdResult, IndexedNote};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::note_store::NoteStore;

/// Create a note at the front with whichever fields were given.
pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<CmdResult> {
    store.create_with(title, content)?;

    // New note is always first
    let created = IndexedNote::at(store, 0).into_iter().collect();
    let mut result = CmdResult::default().with_affected_notes(created);
    result.add_message(CmdMessage::success(format!(
        "Note created: {}",
        store.draft().title
    )));
    Ok(result)
}
