use crate::commands::{CmdResult, IndexedNote};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::note_store::NoteStore;

/// Make the note at `index` active. The selected note is returned as listed.
pub fn run<B: StorageBackend>(store: &mut NoteStore<B>, index: usize) -> Result<CmdResult> {
    store.select(index)?;
    let selected = IndexedNote::at(store, index).into_iter().collect();
    Ok(CmdResult::default().with_listed_notes(selected))
}
