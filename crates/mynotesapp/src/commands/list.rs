use crate::commands::{CmdMessage, CmdResult, IndexedNote};
use crate::store::backend::StorageBackend;
use crate::store::note_store::NoteStore;

pub fn run<B: StorageBackend>(store: &NoteStore<B>) -> CmdResult {
    let listed: Vec<IndexedNote> = (0..store.len())
        .filter_map(|i| IndexedNote::at(store, i))
        .collect();

    let mut result = CmdResult::default().with_listed_notes(listed);
    if store.is_empty() {
        result.add_message(CmdMessage::info("No notes yet."));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_in_display_order_with_active_marked() {
        let mut store = StoreFixture::new().with_notes(3).build();
        store.select(1).unwrap();

        let res = run(&store);
        let indexes: Vec<usize> = res.listed_notes.iter().map(|n| n.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
        let active: Vec<bool> = res.listed_notes.iter().map(|n| n.active).collect();
        assert_eq!(active, vec![false, true, false]);
        assert!(res.messages.is_empty());
    }

    #[test]
    fn empty_store_reports_no_notes() {
        let store = StoreFixture::new().build();
        let res = run(&store);
        assert!(res.listed_notes.is_empty());
        assert_eq!(res.messages[0].content, "No notes yet.");
    }
}
